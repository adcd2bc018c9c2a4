//! Date parsing for the temporal coercion pass.
//!
//! Temporal cells are stored as whole days since the Unix epoch so the
//! column can share the numeric median machinery; the column's `Temporal`
//! tag carries the meaning.

use chrono::{Duration, NaiveDate, NaiveDateTime};

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d-%b-%Y",  // 15-Jan-2024
    "%d-%B-%Y",  // 15-January-2024
    "%m/%d/%Y",  // US: 01/15/2024
    "%d/%m/%Y",  // European: 15/01/2024
    "%d.%m.%Y",  // German: 15.01.2024
    "%Y%m%d",    // Compact: 20240115
    "%b %d, %Y", // Jan 15, 2024
    "%B %d, %Y", // January 15, 2024
    "%d %b %Y",  // 15 Jan 2024
    "%d %B %Y",  // 15 January 2024
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parses a cell's text as a calendar date, trying date-only formats first
/// and falling back to datetime formats (the time part is dropped).
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt.date());
        }
    }
    None
}

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default()
}

/// Days since 1970-01-01 (negative before the epoch).
pub fn to_epoch_days(date: NaiveDate) -> f64 {
    (date - epoch()).num_days() as f64
}

/// Inverse of `to_epoch_days`; fractional day counts (a median of an even
/// number of dates) round to the nearest day.
pub fn from_epoch_days(days: f64) -> NaiveDate {
    epoch() + Duration::days(days.round() as i64)
}

/// ISO 8601 rendering of a temporal cell payload.
pub fn format_epoch_days(days: f64) -> String {
    from_epoch_days(days).format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).expect("date");
        assert_eq!(parse_date("2024-01-15"), Some(expected));
        assert_eq!(parse_date("01/15/2024"), Some(expected));
        assert_eq!(parse_date("15-Jan-2024"), Some(expected));
        assert_eq!(parse_date("Jan 15, 2024"), Some(expected));
        assert_eq!(parse_date("2024-01-15T10:30:00"), Some(expected));
    }

    #[test]
    fn rejects_non_dates() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("2024-13-40"), None);
    }

    #[test]
    fn epoch_days_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).expect("date");
        let days = to_epoch_days(date);
        assert_eq!(from_epoch_days(days), date);
        assert_eq!(to_epoch_days(epoch()), 0.0);
        assert_eq!(format_epoch_days(days), "2024-01-15");
    }

    #[test]
    fn fractional_days_round_to_nearest() {
        let lo = to_epoch_days(NaiveDate::from_ymd_opt(2024, 1, 15).expect("date"));
        let hi = to_epoch_days(NaiveDate::from_ymd_opt(2024, 1, 16).expect("date"));
        let mid = (lo + hi) / 2.0;
        assert_eq!(format_epoch_days(mid), "2024-01-16");
    }
}
