//! Order Tracker - EMI payment reminders for tracked orders
//!
//! # Module structure
//!
//! ```text
//! order-tracker/src/
//! ├── core/        # configuration, errors
//! ├── reminders/   # working-day counter, reminder evaluator, service
//! ├── store/       # order store abstraction
//! └── utils/       # logging
//! ```
//!
//! The reminder core is a pure function of (today, holidays, orders); the
//! service wires it to an [`OrderStore`] and a
//! [`HolidaySource`](holiday_client::HolidaySource).

pub mod core;
pub mod reminders;
pub mod store;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, TrackerError, TrackerResult};
pub use reminders::{
    ReminderMessage, ReminderService, ReminderWindow, count_working_days, evaluate_reminders,
    is_working_day, reference_date,
};
pub use store::{InMemoryOrderStore, JsonFileOrderStore, OrderStore};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
