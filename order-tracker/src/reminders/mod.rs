//! EMI reminders
//!
//! - [`calendar`] - weekend/holiday-aware working-day counting
//! - [`evaluator`] - which orders surface a reminder today
//! - [`service`] - wires the evaluator to an order store and a holiday source
//!
//! Nothing here remembers which reminders were already shown: an eligible
//! order is reported on every day of its window.

pub mod calendar;
pub mod evaluator;
pub mod service;


pub use calendar::{count_working_days, is_working_day};
pub use evaluator::{ReminderMessage, ReminderWindow, evaluate_reminders, reference_date};
pub use service::ReminderService;
