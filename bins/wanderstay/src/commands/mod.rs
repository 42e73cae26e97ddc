//! Subcommand implementations

pub mod booking;
pub mod bookmark;
pub mod hotels;
pub mod packages;
pub mod places;
