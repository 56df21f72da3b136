//! Seconds to "H hours, M minutes, S seconds".

use crate::core::constants::SECONDS_PER_MINUTE;

/// Split `seconds` with `seconds_per_hour` as the hour unit; every part is
/// truncated towards zero.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn split_seconds(seconds: f64, seconds_per_hour: f64) -> (i64, i64, i64) {
    let hours = (seconds / seconds_per_hour).floor();
    let rem = seconds - hours * seconds_per_hour;
    let minutes = (rem / SECONDS_PER_MINUTE).floor();
    let secs = rem - minutes * SECONDS_PER_MINUTE;
    (hours as i64, minutes as i64, secs.trunc() as i64)
}

#[must_use]
pub fn format_seconds(seconds: f64, seconds_per_hour: f64) -> String {
    let (h, m, s) = split_seconds(seconds, seconds_per_hour);
    format!("{h} hours, {m} minutes, {s} seconds")
}
