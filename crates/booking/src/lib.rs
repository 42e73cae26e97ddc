//! Reservations for Wanderstay
//!
//! - [`price_stay`]: nights, subtotal, tax and total for a stay
//! - [`ReservationEngine`]: confirm and cancel hotel bookings against shared
//!   room inventory, and book tour packages
//! - [`TravelStore`]: the persistence boundary, with an [`InMemoryStore`]
//! - [`Session`] and [`toggle_bookmark`]: the logged-in user and their saved
//!   places

#![warn(clippy::all)]

pub mod bookmarks;
pub mod engine;
pub mod error;
pub mod memory;
pub mod pricing;
pub mod session;
pub mod stay;
pub mod store;

pub use bookmarks::toggle_bookmark;
pub use engine::{EngineConfig, ReservationEngine};
pub use error::{BookingError, BookingErrorCode, Result, StoreError, StoreResult};
pub use memory::{FailPoint, InMemoryStore, Snapshot};
pub use pricing::{price_stay, round_currency, PriceBreakdown, Pricer, DEFAULT_TAX_RATE};
pub use session::Session;
pub use stay::{StayRequest, DEFAULT_MAX_GUESTS_PER_ROOM};
pub use store::TravelStore;
