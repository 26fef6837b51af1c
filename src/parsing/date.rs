//! Date prefix normalization.

use chrono::NaiveDateTime;

use crate::error::{ChatplotError, Result};

/// Formats tried in order. Month comes first; two-digit years come before
/// four-digit ones so `23` is never read as year 23.
const DATE_FORMATS: &[&str] = &[
    "%m/%d/%y, %H:%M",
    "%m/%d/%y, %H:%M:%S",
    "%m/%d/%y, %I:%M %p",
    "%m/%d/%y, %I:%M:%S %p",
    "%m/%d/%y %H:%M",
    "%m/%d/%Y, %H:%M",
    "%m/%d/%Y, %H:%M:%S",
    "%m/%d/%Y, %I:%M %p",
    "%m/%d/%Y %H:%M",
];

/// Parses a date prefix such as `1/2/23, 14:05` into a timestamp.
///
/// Seconds default to zero when absent.
///
/// # Errors
///
/// Returns [`ChatplotError::InvalidDate`] when no format fits or the
/// calendar date does not exist.
///
/// # Example
///
/// ```
/// use chatplot::parsing::normalize_date;
/// use chrono::{Datelike, Timelike};
///
/// let ts = normalize_date("1/2/23, 14:05")?;
/// assert_eq!((ts.year(), ts.month(), ts.day()), (2023, 1, 2));
/// assert_eq!((ts.hour(), ts.minute(), ts.second()), (14, 5, 0));
/// # Ok::<(), chatplot::ChatplotError>(())
/// ```
pub fn normalize_date(date_str: &str) -> Result<NaiveDateTime> {
    let trimmed = date_str.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| ChatplotError::invalid_date(date_str))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_month_first() {
        assert_eq!(normalize_date("1/2/23, 14:05").unwrap(), at(2023, 1, 2, 14, 5));
        assert_eq!(normalize_date("12/31/99, 23:59").unwrap(), at(1999, 12, 31, 23, 59));
    }

    #[test]
    fn test_zero_padded() {
        assert_eq!(normalize_date("01/02/23, 09:05").unwrap(), at(2023, 1, 2, 9, 5));
        assert_eq!(normalize_date("1/2/23, 9:05").unwrap(), at(2023, 1, 2, 9, 5));
    }

    #[test]
    fn test_lenient_variants() {
        assert_eq!(normalize_date("1/2/2023, 14:05").unwrap(), at(2023, 1, 2, 14, 5));
        assert_eq!(normalize_date("1/2/23, 2:05 PM").unwrap(), at(2023, 1, 2, 14, 5));
        assert_eq!(normalize_date(" 1/2/23, 14:05 ").unwrap(), at(2023, 1, 2, 14, 5));
        assert_eq!(
            normalize_date("1/2/23, 14:05:30").unwrap(),
            at(2023, 1, 2, 14, 5) + chrono::Duration::seconds(30)
        );
    }

    #[test]
    fn test_impossible_date_fails() {
        let err = normalize_date("2/30/23, 10:00").unwrap_err();
        assert!(err.is_invalid_date());
        assert!(err.to_string().contains("2/30/23, 10:00"));
    }

    #[test]
    fn test_day_zero_fails() {
        assert!(normalize_date("1/00/23, 10:00").is_err());
    }

    #[test]
    fn test_garbage_fails() {
        assert!(normalize_date("yesterday").is_err());
        assert!(normalize_date("").is_err());
    }
}
