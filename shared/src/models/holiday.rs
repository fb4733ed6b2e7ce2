//! Holiday Set Model

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Fixed national holidays used when live holiday data is unavailable:
/// Republic Day, Independence Day, Gandhi Jayanti
const FALLBACK_HOLIDAYS: [(u32, u32); 3] = [(1, 26), (8, 15), (10, 2)];

/// Public holidays keyed by calendar date
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    /// Create an empty holiday set
    pub fn new() -> Self {
        Self::default()
    }

    /// The degraded set: three fixed national holidays in `year`
    pub fn fallback(year: i32) -> Self {
        FALLBACK_HOLIDAYS
            .iter()
            .filter_map(|&(month, day)| NaiveDate::from_ymd_opt(year, month, day))
            .collect()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Add a holiday; returns `false` if it was already present
    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    /// Drop every date that does not fall in `year`
    pub fn retain_year(&mut self, year: i32) {
        self.dates.retain(|d| d.year() == year);
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Holidays in ascending date order
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

impl Extend<NaiveDate> for HolidaySet {
    fn extend<I: IntoIterator<Item = NaiveDate>>(&mut self, iter: I) {
        self.dates.extend(iter);
    }
}
