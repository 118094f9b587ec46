//! Timestamp rendering for signed requests.
use chrono::{DateTime, NaiveDateTime, Utc};

use crate::errors::*;

/// Time format for ISO 8601 basic: "20250615T120000Z"
pub const LONG_DATETIME_FMT: &str = "%Y%m%dT%H%M%SZ";
/// Date format: "20250615"
pub const SHORT_DATE_FMT: &str = "%Y%m%d";

const SHORT_DATE_LEN: usize = 8;

/// Render `date_time` as `YYYYMMDDTHHMMSSZ`.
pub fn format_timestamp(date_time: &DateTime<Utc>) -> String {
    date_time.format(LONG_DATETIME_FMT).to_string()
}

/// Render `date_time` as `YYYYMMDD`.
pub fn format_date(date_time: &DateTime<Utc>) -> String {
    date_time.format(SHORT_DATE_FMT).to_string()
}

/// Parse a `YYYYMMDDTHHMMSSZ` string.
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(text, LONG_DATETIME_FMT)
        .map(|naive| naive.and_utc())
        .map_err(|_| Error::from(ErrorKind::InvalidTimestamp(text.to_string())))
}

/// The `YYYYMMDD` prefix of a timestamp string.
///
/// A string too short to carry a date is returned whole.
pub fn date_of(timestamp: &str) -> &str {
    timestamp.get(..SHORT_DATE_LEN).unwrap_or(timestamp)
}
