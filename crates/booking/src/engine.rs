//! Reservation engine
//!
//! Confirming a booking consumes shared room inventory. The decrement is a
//! compare-and-swap against the store, re-read and retried when another
//! booking got there first, and the booking is written only after the rooms
//! are held. If writing the booking fails the rooms are released again.

use crate::error::{BookingError, Result, StoreError, StoreResult};
use crate::pricing::{PriceBreakdown, Pricer};
use crate::session::Session;
use crate::stay::{StayRequest, DEFAULT_MAX_GUESTS_PER_ROOM};
use crate::store::TravelStore;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use wanderstay_core::config::BookingSettings;
use wanderstay_core::models::{
    BookingRecord, BookingStatus, Hotel, NewBooking, NewPackageBooking, Package, PackageBooking,
};
use wanderstay_telemetry::{metrics, Timer};

/// Engine settings
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub tax_rate: f64,
    pub max_guests_per_room: u32,
    /// Put rooms back when a confirmed booking is cancelled
    pub restore_inventory_on_cancel: bool,
    /// Compare-and-swap attempts per inventory change
    pub max_inventory_attempts: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from(&BookingSettings::default())
    }
}

impl From<&BookingSettings> for EngineConfig {
    fn from(settings: &BookingSettings) -> Self {
        Self {
            tax_rate: settings.tax_rate,
            max_guests_per_room: if settings.max_guests_per_room == 0 {
                DEFAULT_MAX_GUESTS_PER_ROOM
            } else {
                settings.max_guests_per_room
            },
            restore_inventory_on_cancel: settings.restore_inventory_on_cancel,
            max_inventory_attempts: settings.max_inventory_attempts.max(1),
        }
    }
}

/// Prices, confirms and cancels hotel stays and books packages.
pub struct ReservationEngine {
    store: Arc<dyn TravelStore>,
    pricer: Pricer,
    config: EngineConfig,
}

impl ReservationEngine {
    pub fn new(store: Arc<dyn TravelStore>, config: EngineConfig) -> Self {
        Self {
            store,
            pricer: Pricer::new(config.tax_rate),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn TravelStore> {
        &self.store
    }

    /// Cost of `rooms` rooms at `hotel` between the two dates
    pub fn price_stay(
        &self,
        hotel: &Hotel,
        check_in: NaiveDate,
        check_out: NaiveDate,
        rooms: u32,
    ) -> Result<PriceBreakdown> {
        self.pricer.price_stay(hotel, check_in, check_out, rooms)
    }

    /// Reserve rooms and record a confirmed booking for the session's user.
    ///
    /// `hotel` is the snapshot the user looked at; inventory is re-checked
    /// against the store while reserving.
    #[tracing::instrument(
        skip_all,
        fields(hotel_id = %hotel.id, user_id = %session.user_id(), rooms = stay.rooms)
    )]
    pub async fn confirm_booking(
        &self,
        hotel: &Hotel,
        stay: &StayRequest,
        session: &Session,
    ) -> Result<BookingRecord> {
        let _timer = Timer::start("booking.confirm_ms");

        stay.validate(self.config.max_guests_per_room)?;
        if stay.rooms > hotel.rooms_available {
            return Err(BookingError::InsufficientInventory {
                requested: stay.rooms,
                available: hotel.rooms_available,
            });
        }
        let price = self.price_stay(hotel, stay.check_in, stay.check_out, stay.rooms)?;

        let held = self
            .reserve_rooms(&hotel.id, hotel.rooms_available, stay.rooms)
            .await?;
        tracing::debug!(rooms_left = held.rooms_available, "Rooms reserved");

        let booking = NewBooking {
            user_id: session.user_id().to_string(),
            hotel_id: hotel.id.clone(),
            place_id: hotel.place_id.clone(),
            check_in: stay.check_in,
            check_out: stay.check_out,
            guests: stay.guests,
            rooms: stay.rooms,
            total_price: price.total,
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
        };

        match self.store.create_booking(booking).await {
            Ok(record) => {
                metrics().increment("bookings.confirmed");
                tracing::info!(
                    booking_id = %record.id,
                    total = price.total,
                    nights = price.nights,
                    "Booking confirmed"
                );
                Ok(record)
            }
            Err(cause) => {
                tracing::warn!(error = %cause, "Booking write failed, releasing rooms");
                match self.release_rooms(&hotel.id, stay.rooms).await {
                    Ok(_) => {
                        metrics().increment("bookings.rolled_back");
                        Err(cause.into())
                    }
                    Err(rollback) => {
                        metrics().increment("bookings.inconsistent");
                        tracing::error!(
                            error = %cause,
                            rollback_error = %rollback,
                            "Rooms held without a booking"
                        );
                        Err(BookingError::InconsistentState {
                            operation: "create booking",
                            cause,
                            rollback,
                        })
                    }
                }
            }
        }
    }

    /// Mark a booking cancelled.
    ///
    /// The status change is conditional on the status read here, so of two
    /// concurrent cancellations only one succeeds. Rooms go back into
    /// inventory only when `restore_inventory_on_cancel` is set and the
    /// booking was confirmed. If they cannot be restored the booking is
    /// reopened and the cancellation fails.
    #[tracing::instrument(skip(self))]
    pub async fn cancel_booking(&self, booking_id: &str) -> Result<BookingRecord> {
        let booking = self.store.get_booking(booking_id).await?;
        let previous = booking.status;
        if !previous.can_transition_to(BookingStatus::Cancelled) {
            return Err(BookingError::InvalidStatusTransition {
                from: previous,
                to: BookingStatus::Cancelled,
            });
        }

        let cancelled = match self
            .store
            .patch_booking_status(booking_id, previous, BookingStatus::Cancelled)
            .await
        {
            Ok(record) => record,
            Err(StoreError::StatusConflict { current })
                if !current.can_transition_to(BookingStatus::Cancelled) =>
            {
                tracing::debug!(%current, "Booking changed while cancelling");
                return Err(BookingError::InvalidStatusTransition {
                    from: current,
                    to: BookingStatus::Cancelled,
                });
            }
            Err(e) => return Err(e.into()),
        };

        if self.config.restore_inventory_on_cancel && previous == BookingStatus::Confirmed {
            match self.release_rooms(&booking.hotel_id, booking.rooms).await {
                Ok(hotel) => {
                    tracing::debug!(rooms_left = hotel.rooms_available, "Rooms restored");
                }
                Err(cause) => {
                    tracing::warn!(error = %cause, "Rooms not restored, reopening booking");
                    return match self
                        .store
                        .patch_booking_status(booking_id, BookingStatus::Cancelled, previous)
                        .await
                    {
                        Ok(_) => Err(cause.into()),
                        Err(rollback) => {
                            metrics().increment("bookings.inconsistent");
                            tracing::error!(
                                error = %cause,
                                rollback_error = %rollback,
                                "Booking cancelled without its rooms restored"
                            );
                            Err(BookingError::InconsistentState {
                                operation: "restore inventory",
                                cause,
                                rollback,
                            })
                        }
                    };
                }
            }
        }

        metrics().increment("bookings.cancelled");
        tracing::info!(booking_id, previous = %previous, "Booking cancelled");
        Ok(cancelled)
    }

    /// Record a pending booking of a tour package. Packages have no inventory.
    #[tracing::instrument(skip_all, fields(package_id = %package.id))]
    pub async fn book_package(
        &self,
        package: &Package,
        session: &Session,
    ) -> Result<PackageBooking> {
        let booking = NewPackageBooking {
            package_id: package.id.clone(),
            package_name: package.name.clone(),
            price: package.price,
            start_date: package.start_date.clone(),
            user_email: Some(session.email().to_string()),
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        };

        let record = self.store.create_package_booking(booking).await?;
        metrics().increment("packages.booked");
        tracing::info!(booking_id = %record.id, "Package booked");
        Ok(record)
    }

    /// All hotel bookings of the session's user
    pub async fn user_bookings(&self, session: &Session) -> Result<Vec<BookingRecord>> {
        Ok(self.store.list_user_bookings(session.user_id()).await?)
    }

    async fn reserve_rooms(&self, hotel_id: &str, seen: u32, rooms: u32) -> Result<Hotel> {
        let mut expected = seen;
        let mut attempt = 1;

        loop {
            let Some(remaining) = expected.checked_sub(rooms) else {
                return Err(BookingError::InsufficientInventory {
                    requested: rooms,
                    available: expected,
                });
            };

            match self.store.update_inventory(hotel_id, expected, remaining).await {
                Err(StoreError::Conflict { current }) => {
                    metrics().increment("inventory.conflicts");
                    if attempt >= self.config.max_inventory_attempts {
                        return Err(BookingError::Persistence(StoreError::Conflict { current }));
                    }
                    tracing::debug!(attempt, expected, current, "Inventory changed, retrying");
                    expected = current;
                    attempt += 1;
                }
                other => return Ok(other?),
            }
        }
    }

    async fn release_rooms(&self, hotel_id: &str, rooms: u32) -> StoreResult<Hotel> {
        let mut expected = self.store.get_hotel(hotel_id).await?.rooms_available;
        let mut attempt = 1;

        loop {
            let restored = expected.saturating_add(rooms);
            match self.store.update_inventory(hotel_id, expected, restored).await {
                Err(StoreError::Conflict { current })
                    if attempt < self.config.max_inventory_attempts =>
                {
                    metrics().increment("inventory.conflicts");
                    expected = current;
                    attempt += 1;
                }
                other => return other,
            }
        }
    }
}
