//! The API's compact UTC timestamp format.
//!
//! Records keep timestamps as the raw wire string and parse on demand, so a
//! malformed value fails the accessor rather than the whole decode.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{Error, ErrorKind, Result};

/// `chrono` format string for values like `20180712T110230.000Z`.
pub const TIME_FORMAT: &str = "%Y%m%dT%H%M%S%.3fZ";

/// Parse an API timestamp into a UTC time.
///
/// ```rust
/// use royale_cr_client::time::parse_timestamp;
///
/// let at = parse_timestamp("20180712T110230.000Z").unwrap();
/// assert_eq!(at.timestamp(), 1531393350);
/// ```
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, TIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| {
            Error::with_source(ErrorKind::Timestamp(format!("{raw:?}: {e}")), e)
        })
}

/// Format a UTC time in the API's wire format.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format(TIME_FORMAT).to_string()
}
