//! Working-day arithmetic against a holiday calendar

use chrono::{Datelike, NaiveDate, Weekday};
use shared::HolidaySet;

/// Monday to Friday and not a holiday
pub fn is_working_day(date: NaiveDate, holidays: &HolidaySet) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !holidays.contains(date)
}

/// Number of working days in `[start, end]`, both ends included.
///
/// Returns 0 when `start > end`.
pub fn count_working_days(start: NaiveDate, end: NaiveDate, holidays: &HolidaySet) -> u32 {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| is_working_day(*d, holidays))
        .count() as u32
}
