//! Date conversions for the `git log --date iso` format.

use chrono::{DateTime, FixedOffset};

use crate::{CommitError, CommitResult};

/// Date format used by `git log --date iso` and by the report.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Parses a `YYYY-MM-DD HH:MM:SS ±HHMM` date.
///
/// # Errors
///
/// Returns [`CommitError::InvalidDate`] if the string does not match the format.
pub fn str_to_date(value: &str) -> CommitResult<DateTime<FixedOffset>> {
    DateTime::parse_from_str(value, DATE_FORMAT).map_err(|source| CommitError::InvalidDate {
        value: value.to_string(),
        source,
    })
}

/// Formats a date with [`DATE_FORMAT`].
#[must_use]
pub fn date_to_str(date: &DateTime<FixedOffset>) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn expected() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2017, 3, 21, 16, 9, 13)
            .unwrap()
    }

    #[test]
    fn test_str_to_date() {
        let date = str_to_date("2017-03-21 16:09:13 +0100").unwrap();
        assert_eq!(date, expected());
        assert_eq!(date.offset().local_minus_utc(), 3600);
    }

    #[test]
    fn test_date_to_str() {
        assert_eq!(date_to_str(&expected()), "2017-03-21 16:09:13 +0100");
    }

    #[test]
    fn test_negative_offset() {
        let date = str_to_date("2020-01-02 03:04:05 -0730").unwrap();
        assert_eq!(date_to_str(&date), "2020-01-02 03:04:05 -0730");
    }

    #[test]
    fn test_invalid_date() {
        let err = str_to_date("21/03/2017 16:09").unwrap_err();
        match err {
            CommitError::InvalidDate { value, .. } => assert_eq!(value, "21/03/2017 16:09"),
            CommitError::MalformedEntry(_) => panic!("Expected InvalidDate error"),
        }
    }

    #[test]
    fn test_missing_offset_is_invalid() {
        assert!(str_to_date("2017-03-21 16:09:13").is_err());
    }
}
