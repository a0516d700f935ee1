//! Metadata query parsing and local time conversion
//!
//! The query prints a single `kMDItemLastUsedDate = <value>` line where
//! `<value>` is either [`NULL_SENTINEL`] or a timestamp with a numeric UTC
//! offset (`2024-01-01 12:00:00 +0000`).

use crate::error::ResolveError;
use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;
use std::time::SystemTime;

/// Wall-clock format of every timestamp this crate hands out
pub const LOCAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Value printed by the query when the entry was never opened
pub const NULL_SENTINEL: &str = "(null)";

/// Format of timestamps in the query output
const QUERY_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Extract the trimmed value after the first `= `
pub fn extract_value(output: &str) -> Result<&str, ResolveError> {
    output
        .split_once("= ")
        .map(|(_, value)| value.trim())
        .ok_or_else(|| ResolveError::MalformedOutput {
            output: output.trim().to_string(),
        })
}

/// Parse raw query output into a local timestamp in `tz`
///
/// Returns `Ok(None)` when the query reports the null sentinel.
pub fn parse_last_used<Tz>(output: &str, tz: &Tz) -> Result<Option<String>, ResolveError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let value = extract_value(output)?;
    if value == NULL_SENTINEL {
        return Ok(None);
    }

    to_local(value, tz).map(Some)
}

/// Convert `YYYY-MM-DD HH:MM:SS ±HHMM` into `YYYY-MM-DD HH:MM:SS` in `tz`
pub fn to_local<Tz>(value: &str, tz: &Tz) -> Result<String, ResolveError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let parsed = DateTime::parse_from_str(value, QUERY_FORMAT).map_err(|source| {
        ResolveError::InvalidTimestamp {
            value: value.to_string(),
            source,
        }
    })?;

    Ok(parsed.with_timezone(tz).format(LOCAL_FORMAT).to_string())
}

/// Format a filesystem time in `tz`, dropping sub-second precision
pub fn format_system_time<Tz>(time: SystemTime, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    DateTime::<Utc>::from(time)
        .with_timezone(tz)
        .format(LOCAL_FORMAT)
        .to_string()
}
