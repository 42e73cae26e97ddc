//! Error types for the API client

use thiserror::Error;
use wanderstay_booking::StoreError;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// API returned an error response
    #[error("API error ({status}): {message}")]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Circuit breaker is open
    #[error("Circuit breaker is open - backend temporarily unavailable")]
    CircuitOpen,

    /// All retry attempts exhausted
    #[error("All {attempts} retry attempts failed: {last_error}")]
    RetriesExhausted {
        /// Number of attempts made
        attempts: u32,
        /// Last error message
        last_error: String,
    },
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an API response error
    pub fn api_response(status: u16, message: impl Into<String>) -> Self {
        Self::ApiResponse {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is retryable
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request(e) => e.is_connect() || e.is_timeout(),
            Self::ApiResponse { status, .. } => *status >= 500 || *status == 429,
            Self::Config(_)
            | Self::Json(_)
            | Self::InvalidUrl(_)
            | Self::CircuitOpen
            | Self::RetriesExhausted { .. } => false,
        }
    }

    /// Check if the backend answered 404
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiResponse { status: 404, .. })
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if (400..500).contains(status))
    }

    /// Convert into the store error the reservation engine understands.
    ///
    /// `resource` and `id` name what was being fetched, for 404s.
    pub fn into_store_error(self, resource: &'static str, id: &str) -> StoreError {
        if self.is_not_found() {
            return StoreError::not_found(resource, id);
        }
        self.into_transport_error()
    }

    /// Convert into a transport failure, 404s included.
    ///
    /// For writes to a collection, where a 404 says nothing about the record.
    pub fn into_transport_error(self) -> StoreError {
        // an open circuit half-opens after its reset timeout
        let retryable = self.is_retryable()
            || matches!(self, Self::CircuitOpen | Self::RetriesExhausted { .. });
        StoreError::transport(self.to_string(), retryable)
    }
}
