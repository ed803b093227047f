//! Date/time display helpers. Every timestamp on screen uses
//! `DD.MM.YYYY HH:MM:SS`.

use chrono::{DateTime, Utc};
use contracts::domain::a002_stock::parse_entry_date;

/// Reformat an ISO-8601 string from the API; unparseable input is shown as is
pub fn format_datetime(datetime_str: &str) -> String {
    parse_entry_date(datetime_str)
        .map(|dt| format_timestamp(&dt))
        .unwrap_or_else(|| datetime_str.to_string())
}

pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15.03.2024 14:02:26");
        assert_eq!(format_datetime("2024-03-15T14:02:26"), "15.03.2024 14:02:26");
        assert_eq!(format_datetime("2024-03-15"), "15.03.2024 00:00:00");
    }

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 8, 30, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "01.01.2024 08:30:00");
    }

    #[test]
    fn test_unparseable_passthrough() {
        assert_eq!(format_datetime("invalid"), "invalid");
    }
}
