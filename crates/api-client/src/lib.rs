//! REST client for the Wanderstay travel backend
//!
//! The backend is a json-server style API exposing `places`, `hotels`,
//! `bookings`, `users` and `packages` collections.
//!
//! # Features
//!
//! - **Environment-based configuration**: `WANDERSTAY_API_URL`,
//!   `WANDERSTAY_ENV` and `WANDERSTAY_TIMEOUT_SECS`
//! - **Retry with exponential backoff**: Automatic retry for transient failures
//! - **Circuit breaker**: Stop hammering a backend that is down
//! - **Request correlation**: Every request carries an `X-Request-ID`
//! - **`TravelStore`**: plugs into the reservation engine
//!
//! # Example
//!
//! ```rust,no_run
//! use wanderstay_api_client::{ClientConfig, TravelClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TravelClient::with_config(ClientConfig::from_env())?;
//!
//!     let hotels = client.hotels().list(Some("3")).await?;
//!     println!("{} hotels", hotels.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
mod store;

pub use client::TravelClient;
pub use config::{ClientConfig, Environment, DEFAULT_BASE_URL};
pub use error::{ApiError, ApiResult};
