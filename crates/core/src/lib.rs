//! Core types for the Wanderstay travel client
//!
//! This crate provides the pieces every other crate in the workspace shares:
//!
//! - **Models**: hotels, places, bookings, packages, users and bookmarks as
//!   served by the travel backend
//! - **Error handling**: structured errors with codes, context and recovery
//!   suggestions
//! - **Retry policy**: exponential backoff and a circuit breaker for backend
//!   calls
//! - **Configuration**: TOML configuration with defaults and validation
//!
//! # Example
//!
//! ```
//! use wanderstay_core::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.schema.booking.tax_rate, 0.12);
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod models;
pub mod retry;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{Error, ErrorCode, Result, ResultExt};
    pub use crate::models::{
        Bookmark, BookingRecord, BookingStatus, Hotel, NewBooking, NewPackageBooking, Package,
        PackageBooking, Place, User,
    };
    pub use crate::retry::{CircuitBreaker, CircuitBreakerConfig, RetryConfig};
}
