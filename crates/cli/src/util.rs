//! Shared formatting helpers

use std::fmt::Write;
use std::time::Duration;

/// Lifecycle timestamps: local time with microseconds
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Format elapsed time as `[D day(s), ]H:MM:SS[.ffffff]`
///
/// The fractional part is omitted when it is zero.
pub fn format_runtime(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let days = total / 86_400;
    let hours = (total % 86_400) / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    let micros = elapsed.subsec_micros();

    let mut out = String::new();
    if days == 1 {
        out.push_str("1 day, ");
    } else if days > 1 {
        let _ = write!(out, "{} days, ", days);
    }

    let _ = write!(out, "{}:{:02}:{:02}", hours, minutes, seconds);
    if micros > 0 {
        let _ = write!(out, ".{:06}", micros);
    }

    out
}
