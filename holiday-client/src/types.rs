//! Wire types of the holiday API
//!
//! ```text
//! { "response": { "holidays": [
//!     { "name": "Republic Day",
//!       "date": { "iso": "2024-01-26" },
//!       "type": ["National"] } ] } }
//! ```

use chrono::NaiveDate;
use serde::Deserialize;
use shared::{HolidaySet, parse_iso_date};

/// Holiday type label that marks a nationwide public holiday
pub const NATIONAL: &str = "national";

/// Top-level API payload
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayPayload {
    pub response: HolidayResponseBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HolidayResponseBody {
    pub holidays: Vec<HolidayRecord>,
}

/// One holiday entry
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayRecord {
    #[serde(default)]
    pub name: String,
    pub date: HolidayDate,
    /// Type labels; the first one classifies the holiday
    #[serde(rename = "type", default)]
    pub kinds: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HolidayDate {
    /// `YYYY-MM-DD`, optionally followed by a time part
    pub iso: String,
}

impl HolidayRecord {
    /// Whether the primary type label is "national" (any case)
    ///
    /// An entry without type labels is not national. It is dropped on its
    /// own instead of invalidating the whole payload, so one untyped entry
    /// does not push the caller onto the fallback set.
    pub fn is_national(&self) -> bool {
        self.kinds
            .first()
            .is_some_and(|kind| kind.trim().eq_ignore_ascii_case(NATIONAL))
    }

    /// Calendar date of the holiday, ignoring any time suffix
    pub fn date(&self) -> Option<NaiveDate> {
        self.date.iso.get(..10).and_then(parse_iso_date)
    }
}

impl HolidayPayload {
    /// National holidays falling in `year`
    pub fn national_holidays(&self, year: i32) -> HolidaySet {
        let mut set: HolidaySet = self
            .response
            .holidays
            .iter()
            .filter(|h| h.is_national())
            .filter_map(|h| {
                let date = h.date();
                if date.is_none() {
                    tracing::debug!(name = %h.name, iso = %h.date.iso, "Skipping holiday with unreadable date");
                }
                date
            })
            .collect();
        set.retain_year(year);
        set
    }
}
