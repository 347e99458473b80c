//! Display formatting of the ISO timestamps returned by the API.

use chrono::{DateTime, NaiveDate};

fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    let date_part = value.get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// "2024-03-15T14:02:26.123Z" -> "15 Mar 2024"; unparsable input is returned as-is
pub fn format_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => date.format("%d %b %Y").to_string(),
        None => value.to_string(),
    }
}

/// "2024-03-15T14:02:26.123Z" -> "15 Mar 2024, 14:02"
pub fn format_datetime(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt.format("%d %b %Y, %H:%M").to_string(),
        Err(_) => format_date(value),
    }
}

/// Table cell text for an optional timestamp
pub fn date_cell(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => format_date(v),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15 Mar 2024, 14:02");
        assert_eq!(format_datetime("2024-12-31"), "31 Dec 2024");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15 Mar 2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15 Mar 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(date_cell(&None), "-");
    }
}
