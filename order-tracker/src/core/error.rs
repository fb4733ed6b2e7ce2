use std::path::PathBuf;

use holiday_client::HolidayError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Failed to read orders file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid orders file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("Holiday client error: {0}")]
    Holiday(#[from] HolidayError),
}

pub type TrackerResult<T> = Result<T, TrackerError>;
