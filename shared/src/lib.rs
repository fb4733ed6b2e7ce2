//! Shared types for the order tracker
//!
//! Domain types used by both the holiday client and the tracker itself:
//! order records, holiday sets, amount formatting and date parsing.

pub mod models;
pub mod money;
pub mod util;

// Re-exports
pub use models::{HolidaySet, Order};
pub use money::format_amount;
pub use serde::{Deserialize, Serialize};
pub use util::parse_iso_date;
