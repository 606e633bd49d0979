//! Time-point normalization and interval primitives.
//!
//! Every stored instant is a `DateTime<Utc>`; a missing value is `None`, never
//! a zero timestamp. Text coming from the user is interpreted in an explicit
//! reference zone and immediately normalized to UTC. Display goes the other
//! way: UTC is converted into the viewer's zone right before rendering.
//!
//! ## Accepted input layouts
//!
//! Tried in order, first match wins:
//!
//! | Layout                | Example               |
//! |-----------------------|-----------------------|
//! | `YYYY-MM-DD HH:MM:SS` | `2025-03-14 09:30:00` |
//! | `YYYY-MM-DD`          | `2025-03-14`          |
//! | `MM-DD-YYYY`          | `03-14-2025`          |
//! | `DD-MM-YYYY`          | `14-03-2025`          |
//!
//! Date-only layouts resolve to local midnight in the reference zone.
//!
//! ## Examples
//!
//! ```rust
//! use chrono::{FixedOffset, Utc};
//! use tasktime::libs::time::{format_display, parse_datetime};
//!
//! let tz = FixedOffset::east_opt(2 * 3600).unwrap();
//! let start = parse_datetime("2025-03-14 09:30:00", &tz).unwrap();
//! assert_eq!(format_display(start, &Utc), "Fri 2025-03-14 07:30:00");
//! assert_eq!(parse_datetime("", &tz).unwrap(), None);
//! ```

use crate::libs::error::TimeError;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use std::fmt::Display;

/// Layout with a time-of-day component, and its fixed shape (`9` = digit).
const DATE_TIME_LAYOUT: (&str, &str) = ("%Y-%m-%d %H:%M:%S", "9999-99-99 99:99:99");

/// Date-only layouts, in the order they are tried after [`DATE_TIME_LAYOUT`].
const DATE_LAYOUTS: [(&str, &str); 3] = [
    ("%Y-%m-%d", "9999-99-99"),
    ("%m-%d-%Y", "99-99-9999"),
    ("%d-%m-%Y", "99-99-9999"),
];

/// Layout used when rendering an instant for a reader.
const DISPLAY_LAYOUT: &str = "%a %Y-%m-%d %H:%M:%S";

/// Parses `text` as a wall-clock value in `tz` and normalizes it to UTC.
///
/// An empty string is a valid "absent" value and yields `Ok(None)`. Any other
/// string must match one of the accepted layouts digit for digit. A value
/// that falls into a DST gap of `tz` is moved forward by the gap.
///
/// # Errors
///
/// [`TimeError::Format`] when no layout matches.
pub fn parse_datetime<Tz: TimeZone>(text: &str, tz: &Tz) -> Result<Option<DateTime<Utc>>, TimeError> {
    if text.is_empty() {
        return Ok(None);
    }

    let local = parse_naive(text)
        .and_then(|naive| resolve_local_forward(tz, &naive))
        .ok_or_else(|| TimeError::Format { value: text.to_string() })?;

    Ok(Some(local.with_timezone(&Utc)))
}

/// Same as [`parse_datetime`] with UTC as the reference zone.
pub fn parse_datetime_utc(text: &str) -> Result<Option<DateTime<Utc>>, TimeError> {
    parse_datetime(text, &Utc)
}

/// Parses a calendar date in one of the date-only layouts.
pub fn parse_date(text: &str) -> Result<NaiveDate, TimeError> {
    parse_naive_date(text).ok_or_else(|| TimeError::Format { value: text.to_string() })
}

fn parse_naive(text: &str) -> Option<NaiveDateTime> {
    let (layout, shape) = DATE_TIME_LAYOUT;
    if has_shape(text, shape) {
        if let Ok(value) = NaiveDateTime::parse_from_str(text, layout) {
            return Some(value);
        }
    }

    parse_naive_date(text).map(|date| date.and_time(NaiveTime::MIN))
}

fn parse_naive_date(text: &str) -> Option<NaiveDate> {
    DATE_LAYOUTS
        .iter()
        .filter(|(_, shape)| has_shape(text, shape))
        .find_map(|(layout, _)| NaiveDate::parse_from_str(text, layout).ok())
}

/// chrono accepts short numeric fields (`2025-3-14`, `25-03-14`); the
/// accepted layouts are fixed width.
fn has_shape(text: &str, shape: &str) -> bool {
    text.len() == shape.len()
        && text.bytes().zip(shape.bytes()).all(|(c, expected)| match expected {
            b'9' => c.is_ascii_digit(),
            _ => c == expected,
        })
}

/// Renders an instant in the viewer's zone as `Fri 2025-03-14 09:30:00`.
///
/// Absent values render as `N/A`.
pub fn format_display<Tz: TimeZone>(value: Option<DateTime<Utc>>, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    match value {
        Some(instant) => instant.with_timezone(tz).format(DISPLAY_LAYOUT).to_string(),
        None => "N/A".to_string(),
    }
}

/// Maps a wall-clock value in `tz` to an instant.
///
/// Ambiguous values (DST fold) resolve to the earlier instant; values inside a
/// DST gap do not exist and yield `None`.
pub fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(naive).earliest()
}

/// Like [`resolve_local`], but a value inside a DST gap moves forward by the
/// usual one-hour shift instead of disappearing.
pub fn resolve_local_forward<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> Option<DateTime<Tz>> {
    resolve_local(tz, naive).or_else(|| resolve_local(tz, &(*naive + Duration::hours(1))))
}

/// Returns the chronologically later of two instants.
pub fn later<Tz: TimeZone>(a: DateTime<Tz>, b: DateTime<Tz>) -> DateTime<Tz> {
    if a > b {
        a
    } else {
        b
    }
}

/// Returns the chronologically earlier of two instants.
pub fn earlier<Tz: TimeZone>(a: DateTime<Tz>, b: DateTime<Tz>) -> DateTime<Tz> {
    if a < b {
        a
    } else {
        b
    }
}

/// Intersects `[a_start, a_end)` with `[b_start, b_end)`.
///
/// Returns `None` when the result is empty, i.e. when the later start is not
/// strictly before the earlier end.
pub fn intersection<Tz: TimeZone>(
    a_start: DateTime<Tz>,
    a_end: DateTime<Tz>,
    b_start: DateTime<Tz>,
    b_end: DateTime<Tz>,
) -> Option<(DateTime<Tz>, DateTime<Tz>)> {
    let start = later(a_start, b_start);
    let end = earlier(a_end, b_end);

    if start < end {
        Some((start, end))
    } else {
        None
    }
}

/// Length of the intersection of two intervals, zero when they are disjoint.
pub fn overlap<Tz: TimeZone>(
    a_start: DateTime<Tz>,
    a_end: DateTime<Tz>,
    b_start: DateTime<Tz>,
    b_end: DateTime<Tz>,
) -> Duration {
    intersection(a_start, a_end, b_start, b_end).map_or_else(Duration::zero, |(start, end)| end - start)
}
