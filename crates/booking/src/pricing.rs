//! Stay pricing

use crate::error::{BookingError, Result};
use chrono::NaiveDate;
use serde::Serialize;
use wanderstay_core::models::Hotel;

pub use wanderstay_core::config::DEFAULT_TAX_RATE;

/// Cost of a stay. Amounts are unrounded; use [`round_currency`] for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub nights: u32,
    pub nightly_rate: f64,
    pub rooms: u32,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

/// Prices stays at a fixed tax rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pricer {
    tax_rate: f64,
}

impl Default for Pricer {
    fn default() -> Self {
        Self::new(DEFAULT_TAX_RATE)
    }
}

impl Pricer {
    pub fn new(tax_rate: f64) -> Self {
        Self { tax_rate }
    }

    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    /// Price `rooms` rooms at `hotel` from `check_in` to `check_out`.
    ///
    /// Nights are whole calendar days between the two dates.
    pub fn price_stay(
        &self,
        hotel: &Hotel,
        check_in: NaiveDate,
        check_out: NaiveDate,
        rooms: u32,
    ) -> Result<PriceBreakdown> {
        let nights = nights_between(check_in, check_out)?;
        if rooms == 0 {
            return Err(BookingError::InvalidRoomCount);
        }

        let subtotal = f64::from(nights) * hotel.price_per_night * f64::from(rooms);
        let tax = subtotal * self.tax_rate;

        Ok(PriceBreakdown {
            nights,
            nightly_rate: hotel.price_per_night,
            rooms,
            subtotal,
            tax,
            total: subtotal + tax,
        })
    }
}

/// Price a stay at the default tax rate.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use wanderstay_booking::price_stay;
/// # use wanderstay_core::models::Hotel;
/// # let hotel = Hotel {
/// #     id: "1".into(), place_id: None, name: "Ridge View".into(),
/// #     address: "Mall Road, Shimla".into(), price_per_night: 1000.0,
/// #     rooms_available: 4, amenities: vec![], rating: 4.0, images: vec![],
/// # };
///
/// let check_in = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let check_out = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
/// let price = price_stay(&hotel, check_in, check_out, 2).unwrap();
/// assert_eq!(price.nights, 2);
/// assert_eq!(price.total, 4480.0);
/// ```
pub fn price_stay(
    hotel: &Hotel,
    check_in: NaiveDate,
    check_out: NaiveDate,
    rooms: u32,
) -> Result<PriceBreakdown> {
    Pricer::default().price_stay(hotel, check_in, check_out, rooms)
}

/// Whole nights between two dates; at least one.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> Result<u32> {
    let days = (check_out - check_in).num_days();
    u32::try_from(days)
        .ok()
        .filter(|&nights| nights > 0)
        .ok_or(BookingError::InvalidDateRange {
            check_in,
            check_out,
        })
}

/// Round an amount to two decimal places.
pub fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
