//! Reminder service - one evaluation per page render

use chrono::{Datelike, NaiveDate};
use holiday_client::HolidaySource;

use super::evaluator::{ReminderMessage, evaluate_reminders};
use crate::store::OrderStore;

/// Loads orders and holidays, then runs the evaluator
pub struct ReminderService<S, H> {
    store: S,
    holidays: H,
}

impl<S, H> ReminderService<S, H>
where
    S: OrderStore,
    H: HolidaySource,
{
    pub fn new(store: S, holidays: H) -> Self {
        Self { store, holidays }
    }

    pub fn holidays(&self) -> &H {
        &self.holidays
    }

    /// EMI reminders to show on `today`
    ///
    /// Never fails: an unreadable store yields no reminders and an
    /// unreachable holiday API yields the fallback holidays.
    pub async fn reminders_for(&self, today: NaiveDate) -> Vec<ReminderMessage> {
        let holidays = self.holidays.holidays(today.year()).await;

        let orders = match self.store.list_orders() {
            Ok(orders) => orders,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load orders, evaluating none");
                Vec::new()
            }
        };

        let reminders = evaluate_reminders(today, &orders, &holidays);
        tracing::info!(
            %today,
            orders = orders.len(),
            holidays = holidays.len(),
            reminders = reminders.len(),
            "EMI reminders evaluated"
        );
        reminders
    }
}
