use chrono::NaiveDate;

/// ISO calendar date format used by persisted orders and the holiday API
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date, ignoring surrounding whitespace.
///
/// Returns `None` for empty or malformed input instead of an error: callers
/// treat an unreadable date as "no date".
pub fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(text, ISO_DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_iso_date("2024-01-24"),
            NaiveDate::from_ymd_opt(2024, 1, 24)
        );
        assert_eq!(
            parse_iso_date(" 2024-01-24\n"),
            NaiveDate::from_ymd_opt(2024, 1, 24)
        );
    }

    #[test]
    fn test_parse_iso_date_rejects_garbage() {
        assert_eq!(parse_iso_date(""), None);
        assert_eq!(parse_iso_date("   "), None);
        assert_eq!(parse_iso_date("24-01-2024"), None);
        assert_eq!(parse_iso_date("2024-02-30"), None);
        assert_eq!(parse_iso_date("2024-01-24T10:00:00"), None);
    }
}
