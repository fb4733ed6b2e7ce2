//! Client error types

use thiserror::Error;

/// Holiday client error type
///
/// Only surfaced by the strict [`crate::HolidayClient::fetch_national`];
/// the fallback path swallows it after logging.
#[derive(Debug, Error)]
pub enum HolidayError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status code
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for holiday client operations
pub type HolidayResult<T> = Result<T, HolidayError>;
