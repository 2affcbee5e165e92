//! DateTime parsing and display with one unambiguous textual form.

use chrono::{DateTime, SecondsFormat, Utc};

/// Parses an RFC3339 timestamp string, returning an error if parsing fails.
///
/// # Examples
///
/// ```
/// use mage_domain::common::parse_datetime;
/// use chrono::Datelike;
///
/// let dt = parse_datetime("2024-03-01T12:00:00Z").unwrap();
/// assert_eq!(dt.year(), 2024);
/// ```
///
/// # Errors
///
/// Returns `chrono::ParseError` if the string is not valid RFC3339.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc))
}

/// Formats an instant as ISO-8601 in UTC with second precision.
///
/// Output never depends on the host locale or time zone, so the same
/// instant always renders to the same string.
///
/// # Examples
///
/// ```
/// use mage_domain::common::{format_timestamp, parse_datetime};
///
/// let dt = parse_datetime("2024-03-01T07:00:00-05:00").unwrap();
/// assert_eq!(format_timestamp(&dt), "2024-03-01T12:00:00Z");
/// ```
pub fn format_timestamp(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn test_parse_datetime_valid() {
        let dt = parse_datetime("2024-01-15T10:30:00Z").unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 1);
        assert_eq!(dt.day(), 15);
        assert_eq!(dt.hour(), 10);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_parse_datetime_with_timezone() {
        let dt = parse_datetime("2024-01-15T10:30:00+05:00").unwrap();
        assert_eq!(dt.hour(), 5);
    }

    #[test]
    fn test_parse_datetime_invalid() {
        assert!(parse_datetime("not-a-date").is_err());
        assert!(parse_datetime("").is_err());
        assert!(parse_datetime("2024-01-15").is_err());
    }

    #[test]
    fn test_format_timestamp_drops_subseconds() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
            + chrono::Duration::milliseconds(750);
        assert_eq!(format_timestamp(&dt), "2024-03-01T12:00:00Z");
    }

    #[test]
    fn test_format_then_parse_is_stable() {
        let dt = Utc.with_ymd_and_hms(2017, 2, 10, 10, 20, 0).unwrap();
        let text = format_timestamp(&dt);
        assert_eq!(parse_datetime(&text).unwrap(), dt);
    }
}
