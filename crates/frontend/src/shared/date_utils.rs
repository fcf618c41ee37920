/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};

use super::config::DISPLAY_UTC_OFFSET_HOURS;

fn display_offset() -> FixedOffset {
    FixedOffset::east_opt(DISPLAY_UTC_OFFSET_HOURS * 3600)
        .unwrap_or_else(|| Utc.fix())
}

/// UTC timestamp to DD/MM/YYYY HH:MM in display time
/// Example: 2024-03-15T14:02:26Z -> "15/03/2024 21:02"
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&display_offset())
        .format("%d/%m/%Y %H:%M")
        .to_string()
}

/// Same as [`format_datetime`] for raw strings; unparsable input is returned as is
pub fn format_datetime_str(datetime_str: &str) -> String {
    match DateTime::parse_from_rfc3339(datetime_str) {
        Ok(dt) => format_datetime(&dt.with_timezone(&Utc)),
        Err(_) => datetime_str.to_string(),
    }
}

/// Date to DD/MM/YYYY
/// Example: 2024-03-15 -> "15/03/2024"
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// ISO date string ("2024-03-15" or full timestamp) to DD/MM/YYYY
pub fn format_date_str(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => format_date(&date),
        Err(_) => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(&dt), "15/03/2024 21:02");
        assert_eq!(format_datetime_str("2024-12-31T20:00:00.000000Z"), "01/01/2025 03:00");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date_str("2024-03-15"), "15/03/2024");
        assert_eq!(format_date_str("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime_str("invalid"), "invalid");
        assert_eq!(format_date_str("invalid"), "invalid");
    }
}
