//! Utilities for date parsing and formatting
//!
//! Date inputs deliver `yyyy-MM-dd`; lists display `DD.MM.YYYY`.

use chrono::{DateTime, NaiveDate, Utc};

/// Format of the native `<input type="date">` value
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date input value.
/// Empty input means "no date"; anything else must be `yyyy-MM-dd`.
pub fn parse_form_date(value: &str) -> Result<Option<NaiveDate>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, FORM_DATE_FORMAT)
        .map(Some)
        .map_err(|e| format!("Invalid date '{}': {}", value, e))
}

/// Format timestamp to DD.MM.YYYY, empty when absent
/// Example: 2024-03-15T14:02:26Z -> "15.03.2024"
pub fn format_date(at: Option<DateTime<Utc>>) -> String {
    at.map(|at| at.format("%d.%m.%Y").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_form_date() {
        assert_eq!(
            parse_form_date("2024-03-15"),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 15))
        );
        assert_eq!(parse_form_date("  "), Ok(None));
    }

    #[test]
    fn test_invalid_format() {
        assert!(parse_form_date("15.03.2024").is_err());
        assert!(parse_form_date("2024-02-30").is_err());
    }

    #[test]
    fn test_format_date() {
        let at = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_date(Some(at)), "31.12.2024");
        assert_eq!(format_date(None), "");
    }
}
