//! Error types for the booking crate.

use chrono::NaiveDate;
use thiserror::Error;
use wanderstay_core::models::BookingStatus;

/// Result type alias for booking operations.
pub type Result<T> = std::result::Result<T, BookingError>;

/// Result type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Failures reported by a [`TravelStore`](crate::store::TravelStore).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The requested resource does not exist
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: String },

    /// A conditional inventory update lost a race
    #[error("Inventory changed concurrently ({current} rooms now available)")]
    Conflict { current: u32 },

    /// A conditional status change found the booking in another status
    #[error("Booking status changed concurrently (now {current})")]
    StatusConflict { current: BookingStatus },

    /// The store could not be reached or rejected the request
    #[error("Store request failed: {message}")]
    Transport { message: String, retryable: bool },
}

impl StoreError {
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    pub fn transport(message: impl Into<String>, retryable: bool) -> Self {
        Self::Transport {
            message: message.into(),
            retryable,
        }
    }

    /// Whether repeating the same request may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { retryable: true, .. })
    }
}

/// Errors that can occur while pricing, booking or cancelling a stay.
#[derive(Debug, Error)]
pub enum BookingError {
    /// Check-out is not after check-in
    #[error("Check-out ({check_out}) must be after check-in ({check_in})")]
    InvalidDateRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    /// The hotel has fewer rooms than requested
    #[error("Only {available} rooms available")]
    InsufficientInventory { requested: u32, available: u32 },

    /// Zero rooms requested
    #[error("At least one room must be booked")]
    InvalidRoomCount,

    /// No guests, or more than the rooms can hold
    #[error("Guest count {guests} is outside 1..={max}")]
    InvalidGuestCount { guests: u32, max: u32 },

    /// The booking cannot move to the requested status
    #[error("Cannot change booking status from {from} to {to}")]
    InvalidStatusTransition {
        from: BookingStatus,
        to: BookingStatus,
    },

    /// A referenced resource does not exist
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: String },

    /// The store failed for a transport reason
    #[error("Persistence failed: {0}")]
    Persistence(#[source] StoreError),

    /// A step failed and undoing the earlier steps failed too
    #[error("Inconsistent state: {operation} failed ({cause}) and rollback failed ({rollback})")]
    InconsistentState {
        operation: &'static str,
        cause: StoreError,
        rollback: StoreError,
    },
}

impl From<StoreError> for BookingError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { resource, id } => Self::NotFound { resource, id },
            other => Self::Persistence(other),
        }
    }
}

/// Error code for integration with wanderstay-core error handling.
/// Range: 11xxx for booking errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingErrorCode {
    InvalidDateRange = 11001,
    InsufficientInventory = 11002,
    InvalidRoomCount = 11003,
    InvalidGuestCount = 11004,
    InvalidStatusTransition = 11005,
    NotFound = 11006,
    Persistence = 11007,
    InconsistentState = 11008,
}

impl BookingError {
    /// Returns the error code for this error.
    pub fn code(&self) -> BookingErrorCode {
        match self {
            BookingError::InvalidDateRange { .. } => BookingErrorCode::InvalidDateRange,
            BookingError::InsufficientInventory { .. } => BookingErrorCode::InsufficientInventory,
            BookingError::InvalidRoomCount => BookingErrorCode::InvalidRoomCount,
            BookingError::InvalidGuestCount { .. } => BookingErrorCode::InvalidGuestCount,
            BookingError::InvalidStatusTransition { .. } => {
                BookingErrorCode::InvalidStatusTransition
            }
            BookingError::NotFound { .. } => BookingErrorCode::NotFound,
            BookingError::Persistence(_) => BookingErrorCode::Persistence,
            BookingError::InconsistentState { .. } => BookingErrorCode::InconsistentState,
        }
    }

    /// Whether the caller can fix the request and try again
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            BookingError::InvalidDateRange { .. }
                | BookingError::InsufficientInventory { .. }
                | BookingError::InvalidRoomCount
                | BookingError::InvalidGuestCount { .. }
                | BookingError::InvalidStatusTransition { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_inventory_message() {
        let err = BookingError::InsufficientInventory {
            requested: 3,
            available: 2,
        };
        assert_eq!(err.to_string(), "Only 2 rooms available");
        assert_eq!(err.code() as u32, 11002);
        assert!(err.is_user_error());
    }

    #[test]
    fn test_store_not_found_maps_to_not_found() {
        let err: BookingError = StoreError::not_found("booking", "42").into();
        assert!(matches!(err, BookingError::NotFound { resource: "booking", ref id } if id == "42"));
    }

    #[test]
    fn test_transport_maps_to_persistence() {
        let err: BookingError = StoreError::transport("connection refused", true).into();
        assert_eq!(err.code(), BookingErrorCode::Persistence);
        assert!(!err.is_user_error());
    }

    #[test]
    fn test_retryable() {
        assert!(StoreError::transport("503", true).is_retryable());
        assert!(!StoreError::transport("400", false).is_retryable());
        assert!(!StoreError::Conflict { current: 1 }.is_retryable());
        assert!(!StoreError::StatusConflict {
            current: BookingStatus::Cancelled
        }
        .is_retryable());
    }
}
