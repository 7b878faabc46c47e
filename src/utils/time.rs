//! Date parsing and timezone utilities
//!
//! User-supplied dates are converted to epoch seconds once, up front. Epochs
//! carry no zone; a display timezone is applied only when rendering.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::warn;

const DATE_LAYOUT: &str = "%Y-%m-%d";

/// Convert an ISO-8601 date string to Unix epoch seconds
///
/// Layouts are tried in order and the first match wins:
/// 1. RFC 3339 date-time (`2025-06-24T15:30:00Z`, `2025-06-24T15:30:00-03:00`)
/// 2. Date only (`2025-06-24`), taken as UTC midnight
/// 3. Date with an offset suffix (`2025-06-24Z`, `2025-06-24+03:00`), midnight at that offset
///
/// # Examples
/// ```
/// use wpp_analytics_cli::utils::time::parse_to_epoch;
/// assert_eq!(parse_to_epoch("2025-06-24T15:30:00Z").unwrap(), 1750779000);
/// assert_eq!(parse_to_epoch("2025-06-24").unwrap(), 1750723200);
/// assert!(parse_to_epoch("invalid-date").is_err());
/// ```
pub fn parse_to_epoch(input: &str) -> AppResult<i64> {
    if let Some(epoch) = parse_date_time(input) {
        return Ok(epoch);
    }

    if is_date_shape(input) {
        if let Some(midnight) = NaiveDate::parse_from_str(input, DATE_LAYOUT)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
        {
            return Ok(Utc.from_utc_datetime(&midnight).timestamp());
        }
    }

    if let Some(epoch) = parse_date_with_offset(input) {
        return Ok(epoch);
    }

    Err(AppError::InvalidDateFormat {
        input: input.to_string(),
    })
}

/// RFC 3339 with an upper-case `T` separator and `Z` designator
fn parse_date_time(input: &str) -> Option<i64> {
    if !is_date_shape(input.get(..10)?) || input.as_bytes().get(10) != Some(&b'T') {
        return None;
    }
    if input.contains('z') {
        return None;
    }
    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| dt.timestamp())
}

/// `YYYY-MM-DD` followed directly by `Z` or `±HH:MM`
fn parse_date_with_offset(input: &str) -> Option<i64> {
    let date = input.get(..10)?;
    let offset = input.get(10..)?;
    if !is_date_shape(date) || !is_offset_shape(offset) {
        return None;
    }
    NaiveDate::parse_from_str(date, DATE_LAYOUT).ok()?;

    DateTime::parse_from_rfc3339(&format!("{}T00:00:00{}", date, offset))
        .ok()
        .map(|dt| dt.timestamp())
}

/// Exactly `DDDD-DD-DD`, zero-padded, no sign
fn is_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// `Z` or `±HH:MM`
fn is_offset_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    match bytes {
        [b'Z'] => true,
        [b'+' | b'-', h1, h2, b':', m1, m2] => {
            [h1, h2, m1, m2].iter().all(|b| b.is_ascii_digit())
        }
        _ => false,
    }
}

/// Convert Unix epoch seconds to wall-clock time in `tz`
///
/// Out-of-range epochs render as the Unix epoch, with a warning.
pub fn epoch_to_local(epoch: i64, tz: &Tz) -> DateTime<Tz> {
    let utc = Utc.timestamp_opt(epoch, 0).single().unwrap_or_else(|| {
        warn!("Epoch {} is out of range; showing 1970-01-01", epoch);
        DateTime::<Utc>::default()
    });
    utc.with_timezone(tz)
}

/// Resolve an IANA timezone name (e.g. `America/Sao_Paulo`)
pub fn load_timezone(name: &str) -> AppResult<Tz> {
    name.parse::<Tz>().map_err(|e| AppError::TimezoneLoad {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

/// Resolve a display timezone, falling back to UTC with a warning
pub fn resolve_timezone(name: &str) -> Tz {
    match load_timezone(name) {
        Ok(tz) => tz,
        Err(e) => {
            warn!("{}; falling back to UTC", e);
            Tz::UTC
        }
    }
}
