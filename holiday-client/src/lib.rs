//! Holiday Client - public holiday data for working-day arithmetic
//!
//! Fetches national public holidays from a Calendarific-compatible HTTP API.
//! A failed fetch never reaches the caller: [`HolidayClient::get_holidays`]
//! degrades to [`HolidaySet::fallback`].

pub mod config;
pub mod error;
pub mod http;
pub mod source;
pub mod types;

pub use config::HolidayClientConfig;
pub use error::{HolidayError, HolidayResult};
pub use http::HolidayClient;
pub use source::{HolidaySource, StaticHolidays};

// Re-export shared types for convenience
pub use shared::HolidaySet;
