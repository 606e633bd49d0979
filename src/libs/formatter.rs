//! Duration formatting utilities for user-friendly display.
//!
//! This module turns `chrono::Duration` values into the compact strings shown
//! in task reports. Two unit systems are supported:
//!
//! - **Calendar form**: days of 24 hours, then hours, minutes and seconds
//!   (`1d 2h 30m`).
//! - **Working form**: working days of a fixed 8 hours, then hours, minutes
//!   and seconds of the remainder (`2wd 3h`).
//!
//! ## Format Specifications
//!
//! - Components are ordered from largest to smallest and joined by a space
//! - Components that evaluate to zero are omitted
//! - A zero duration renders as `0s` rather than an empty string
//! - Sub-second precision is truncated
//! - Negative durations are rendered by magnitude; the sign is dropped
//!
//! The working form uses a fixed display convention. It does not look at the
//! configured schedule: a working day is always [`WORKING_DAY_HOURS`] hours.
//!
//! ## Examples
//!
//! ```rust
//! use chrono::Duration;
//! use tasktime::libs::formatter::{format_duration, format_working_duration};
//!
//! assert_eq!(format_duration(&Duration::seconds(90)), "1m 30s");
//! assert_eq!(format_duration(&Duration::hours(25)), "1d 1h");
//! assert_eq!(format_duration(&Duration::zero()), "0s");
//!
//! assert_eq!(format_working_duration(&Duration::hours(8)), "1wd");
//! assert_eq!(format_working_duration(&Duration::hours(9)), "1wd 1h");
//! ```

use chrono::Duration;

/// Hours in one working day for display conversion.
pub const WORKING_DAY_HOURS: i64 = 8;

/// Token rendered for a duration without any non-zero component.
pub const ZERO_DURATION: &str = "0s";

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
const SECONDS_PER_WORKING_DAY: i64 = WORKING_DAY_HOURS * SECONDS_PER_HOUR;

/// Formats a duration in calendar units (`d h m s`).
///
/// ## Algorithm
///
/// 1. Take the whole seconds of the duration, dropping the sign
/// 2. Split off days of 24 hours
/// 3. Split the remainder into hours, minutes and seconds
/// 4. Keep the non-zero components, largest first
///
/// # Arguments
///
/// * `duration` - A reference to the chrono::Duration to format
///
/// # Returns
///
/// A string such as `"2d 4h 15m"`, or `"0s"` for an empty duration.
///
/// # Examples
///
/// ```rust
/// use tasktime::libs::formatter::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::minutes(-90)), "1h 30m");
/// assert_eq!(format_duration(&Duration::seconds(86_401)), "1d 1s");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    format_units(duration, SECONDS_PER_DAY, "d")
}

/// Formats a duration in working units (`wd h m s`).
///
/// Identical to [`format_duration`] except that the leading unit is a working
/// day of [`WORKING_DAY_HOURS`] hours.
///
/// # Examples
///
/// ```rust
/// use tasktime::libs::formatter::format_working_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_working_duration(&Duration::hours(20)), "2wd 4h");
/// assert_eq!(format_working_duration(&Duration::minutes(7 * 60)), "7h");
/// ```
pub fn format_working_duration(duration: &Duration) -> String {
    format_units(duration, SECONDS_PER_WORKING_DAY, "wd")
}

fn format_units(duration: &Duration, seconds_per_day: i64, day_suffix: &str) -> String {
    let total_seconds = duration.num_seconds().abs();

    let days = total_seconds / seconds_per_day;
    let remainder = total_seconds % seconds_per_day;
    let hours = remainder / SECONDS_PER_HOUR;
    let minutes = (remainder % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = remainder % SECONDS_PER_MINUTE;

    let parts: Vec<String> = [(days, day_suffix), (hours, "h"), (minutes, "m"), (seconds, "s")]
        .into_iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, suffix)| format!("{}{}", value, suffix))
        .collect();

    if parts.is_empty() {
        ZERO_DURATION.to_string()
    } else {
        parts.join(" ")
    }
}
