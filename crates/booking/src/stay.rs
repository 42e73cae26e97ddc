//! Stay requests

use crate::error::{BookingError, Result};
use crate::pricing::nights_between;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use wanderstay_core::config::DEFAULT_MAX_GUESTS_PER_ROOM;

/// Dates and party size for a hotel reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StayRequest {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub rooms: u32,
}

impl StayRequest {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate, guests: u32, rooms: u32) -> Self {
        Self {
            check_in,
            check_out,
            guests,
            rooms,
        }
    }

    /// Check the request on its own, without looking at inventory.
    pub fn validate(&self, max_guests_per_room: u32) -> Result<()> {
        nights_between(self.check_in, self.check_out)?;

        if self.rooms == 0 {
            return Err(BookingError::InvalidRoomCount);
        }

        let max = self.rooms.saturating_mul(max_guests_per_room);
        if self.guests == 0 || self.guests > max {
            return Err(BookingError::InvalidGuestCount {
                guests: self.guests,
                max,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stay(guests: u32, rooms: u32) -> StayRequest {
        StayRequest::new(
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
            guests,
            rooms,
        )
    }

    #[test]
    fn test_valid_stay() {
        assert!(stay(2, 1).validate(DEFAULT_MAX_GUESTS_PER_ROOM).is_ok());
        assert!(stay(8, 2).validate(DEFAULT_MAX_GUESTS_PER_ROOM).is_ok());
    }

    #[test]
    fn test_guest_limits() {
        assert!(matches!(
            stay(0, 1).validate(4),
            Err(BookingError::InvalidGuestCount { guests: 0, max: 4 })
        ));
        assert!(matches!(
            stay(5, 1).validate(4),
            Err(BookingError::InvalidGuestCount { guests: 5, max: 4 })
        ));
        assert!(stay(5, 1).validate(6).is_ok());
    }

    #[test]
    fn test_zero_rooms() {
        assert!(matches!(stay(1, 0).validate(4), Err(BookingError::InvalidRoomCount)));
    }

    #[test]
    fn test_dates_checked_first() {
        let mut request = stay(0, 0);
        request.check_out = request.check_in;
        assert!(matches!(
            request.validate(4),
            Err(BookingError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let request: StayRequest = serde_json::from_str(
            r#"{"checkIn":"2024-03-10","checkOut":"2024-03-12","guests":2,"rooms":1}"#,
        )
        .unwrap();
        assert_eq!(request, stay(2, 1));
    }
}
