//! Reminder evaluator
//!
//! Decides, for a given day, which EMI orders are inside their payment
//! reminder window. Recomputed from scratch on every call.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::{HolidaySet, Order, format_amount};

use super::calendar::count_working_days;

/// Inclusive range of elapsed working days during which a reminder fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderWindow {
    pub min_days: u32,
    pub max_days: u32,
}

impl ReminderWindow {
    /// From the 3rd through the 5th working day after the order date
    pub const EMI: Self = Self {
        min_days: 3,
        max_days: 5,
    };

    pub fn contains(&self, working_days: u32) -> bool {
        (self.min_days..=self.max_days).contains(&working_days)
    }
}

impl Default for ReminderWindow {
    fn default() -> Self {
        Self::EMI
    }
}

/// One reminder for the notification renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReminderMessage {
    pub order_number: String,
    /// Purchase amount in currency unit
    pub purchase: Decimal,
    /// Payment mode label as entered on the order
    pub payment_mode: String,
}

impl ReminderMessage {
    fn for_order(order: &Order) -> Self {
        Self {
            order_number: order.order_number.clone(),
            purchase: order.purchase,
            payment_mode: order.payment_mode().to_string(),
        }
    }

    /// Purchase amount as `1,234,567.89`
    pub fn formatted_purchase(&self) -> String {
        format_amount(self.purchase)
    }
}

impl fmt::Display for ReminderMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "📢 EMI Reminder — Order: {}, Purchase: ₹{}, Payment Mode: {}",
            self.order_number,
            self.formatted_purchase(),
            self.payment_mode
        )
    }
}

/// Date the working-day count runs up to: the day after `today` when today
/// is a holiday, otherwise `today`. Weekends do not shift it.
pub fn reference_date(today: NaiveDate, holidays: &HolidaySet) -> NaiveDate {
    if holidays.contains(today) {
        today.succ_opt().unwrap_or(today)
    } else {
        today
    }
}

/// Orders that should surface an EMI reminder on `today`, in input order.
///
/// Nothing fires on a holiday. Orders without a readable date are skipped.
pub fn evaluate_reminders(
    today: NaiveDate,
    orders: &[Order],
    holidays: &HolidaySet,
) -> Vec<ReminderMessage> {
    let reference = reference_date(today, holidays);
    if holidays.contains(today) {
        tracing::debug!(%today, %reference, "Today is a holiday, reminders deferred");
        return Vec::new();
    }

    let window = ReminderWindow::EMI;
    orders
        .iter()
        .filter_map(|order| {
            let Some(order_date) = order.parsed_date() else {
                tracing::debug!(
                    order_number = %order.order_number,
                    order_date = ?order.order_date,
                    "Skipping order without a readable date"
                );
                return None;
            };

            let working_days = count_working_days(order_date, reference, holidays);
            (window.contains(working_days) && order.is_emi()).then(|| ReminderMessage::for_order(order))
        })
        .collect()
}
