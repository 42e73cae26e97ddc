//! Terminal output for the Wanderstay command-line client
//!
//! Provides shared CLI functionality:
//! - Text or JSON output selection
//! - Amount, rating and date formatting
//! - Status messages and a spinner for backend calls

#![warn(missing_docs)]

pub mod output;
pub mod progress;

pub use output::{OutputFormat, Status};
