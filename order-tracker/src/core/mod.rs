//! Core module - configuration and error definitions
//!
//! - [`Config`] - tracker configuration
//! - [`TrackerError`] - tracker error

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{TrackerError, TrackerResult};
