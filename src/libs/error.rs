//! Typed errors raised by the time engine and its configuration.
//!
//! The engine never terminates the process or writes to the terminal; every
//! failure surfaces as one of these values and the command layer decides what
//! to report. Absent instants are not errors: the calculators map them to a
//! zero result instead.

use thiserror::Error;

/// Failures while turning text into an instant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("could not parse date/time '{value}'. Please use YYYY-MM-DD HH:MM:SS, YYYY-MM-DD, MM-DD-YYYY, or DD-MM-YYYY format")]
    Format { value: String },
}

/// Failures while validating a working-hours window.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("invalid day of week {0}. Must be 0-6 (Sunday-Saturday)")]
    InvalidWeekday(u32),

    #[error("invalid start hour {0}. Must be 0-23")]
    InvalidStartHour(u32),

    #[error("invalid end hour {0}. Must be 0-24")]
    InvalidEndHour(u32),

    #[error("invalid minute {0}. Must be 0-59")]
    InvalidMinute(u32),

    #[error("end hour 24 cannot carry minutes (got 24:{0:02})")]
    PastMidnight(u32),

    #[error("working window {start} - {end} is empty")]
    EmptyWindow { start: String, end: String },
}

/// Failures while resolving configuration values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown time zone '{0}'. Use an IANA name such as Europe/Berlin")]
    UnknownTimeZone(String),
}
