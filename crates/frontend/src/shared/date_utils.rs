/// Utilities for date and time formatting
///
/// The backend sends ISO dates (`2024-03-15`) or timestamps
/// (`2024-03-15T14:02:26.123Z`); tables and exports show `15 Mar 2024`.
use chrono::{DateTime, NaiveDate, NaiveDateTime};

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.date_naive());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(datetime.date());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

/// Format ISO date or datetime string to `DD Mon YYYY`
/// Example: "2024-03-15T14:02:26.123Z" -> "15 Mar 2024"
/// Unrecognised input is returned unchanged.
pub fn format_date(date_str: &str) -> String {
    match parse_date(date_str) {
        Some(date) => date.format("%d %b %Y").to_string(),
        None => date_str.to_string(),
    }
}

/// Value of an `<input type="date">` (`YYYY-MM-DD`); empty or invalid -> None
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Today's date as `YYYYMMDD`, used in export file names
pub fn today_stamp() -> String {
    chrono::Local::now().format("%Y%m%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15 Mar 2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15 Mar 2024");
        assert_eq!(format_date("2024-12-31T23:59:59"), "31 Dec 2024");
        assert_eq!(format_date("2024-12-31 08:00:00"), "31 Dec 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_parse_input_date() {
        assert_eq!(
            parse_input_date("2024-02-29"),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("2023-02-29"), None);
    }
}
