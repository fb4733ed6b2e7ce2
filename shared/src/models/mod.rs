//! Data models
//!
//! Shared between the holiday client and the order tracker.

pub mod holiday;
pub mod order;

// Re-exports
pub use holiday::*;
pub use order::*;
