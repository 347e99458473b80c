use chrono::{DateTime, NaiveDate};

/// Value for an `<input type="date">`: any ISO date or timestamp becomes
/// `yyyy-mm-dd`; anything unparsable becomes an empty string.
pub fn to_date_input(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return String::new();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.date_naive().format("%Y-%m-%d").to_string();
    }
    let date_part = value.get(..10).unwrap_or(value);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_date_input() {
        assert_eq!(to_date_input("2024-03-15T14:02:26.123Z"), "2024-03-15");
        assert_eq!(to_date_input("2024-03-15"), "2024-03-15");
        assert_eq!(to_date_input("2024-03-15 10:00:00"), "2024-03-15");
        assert_eq!(to_date_input(""), "");
        assert_eq!(to_date_input("soon"), "");
    }
}
