//! Date parsing and formatting for the wire format.
//!
//! The backend stores dates as ISO `YYYY-MM-DD` strings. Interactive input
//! also accepts `DD-MM-YYYY`, the format the original date pickers used, and
//! normalizes it to ISO before anything is submitted.

use chrono::{DateTime, NaiveDate, Utc};

use crate::errors::CoreError;

/// Parse a user-entered date.
///
/// Accepts `YYYY-MM-DD` (wire format) or `DD-MM-YYYY` (date-picker format).
///
/// # Errors
///
/// Returns [`CoreError::InvalidDate`] if the value matches neither format.
pub fn parse_user_date(value: &str) -> Result<NaiveDate, CoreError> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%d-%m-%Y"))
        .map_err(|_| CoreError::InvalidDate {
            value: value.to_string(),
        })
}

/// Format a server timestamp for table display, e.g. `Mar 04, 2025 09:15:00 PM`.
#[must_use]
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%b %d, %Y %I:%M:%S %p").to_string()
}

/// Format an optional server timestamp, falling back to `N/A`.
#[must_use]
pub fn format_timestamp_opt(ts: Option<DateTime<Utc>>) -> String {
    ts.map_or_else(|| String::from("N/A"), format_timestamp)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_iso_date() {
        let date = parse_user_date("2025-03-04").expect("should parse");
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
    }

    #[test]
    fn parses_picker_date() {
        let date = parse_user_date("04-03-2025").expect("should parse");
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
    }

    #[test]
    fn trims_whitespace() {
        let date = parse_user_date("  2025-12-31 ").expect("should parse");
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_user_date("next tuesday").unwrap_err();
        assert!(err.to_string().contains("next tuesday"));
    }

    #[test]
    fn iso_date_serializes_to_wire_format() {
        let date = parse_user_date("31-01-2026").expect("should parse");
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2026-01-31\"");
    }

    #[test]
    fn timestamp_formats_for_tables() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 4, 21, 15, 0).unwrap();
        assert_eq!(format_timestamp(ts), "Mar 04, 2025 09:15:00 PM");
    }

    #[test]
    fn missing_timestamp_renders_na() {
        assert_eq!(format_timestamp_opt(None), "N/A");
    }
}
