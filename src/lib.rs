//! # Tasktime - working-time arithmetic for tasks
//!
//! A command-line utility that answers "how long did this task take?" in two
//! ways: plain calendar time, and working time measured against a weekly
//! schedule with breaks and holidays.
//!
//! ## Features
//!
//! - **Flexible Input**: Four date layouts, interpreted in a configurable time zone
//! - **Working Hours**: One window per weekday, overnight shifts, daily breaks
//! - **Holidays**: Dates that never count as working time
//! - **Waiting Periods**: Paused time excluded from a task's duration
//! - **Due Dates**: Remaining time and overdue detection
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasktime::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```
//!
//! The calculators live in [`libs`] and can be used without the database:
//!
//! ```rust
//! use chrono::{TimeZone, Utc, Weekday};
//! use tasktime::libs::formatter::format_working_duration;
//! use tasktime::libs::schedule::{Schedule, WorkingHours};
//!
//! let schedule = Schedule::default().with_hours(WorkingHours::new(Weekday::Mon, 9, 0, 17, 0, 60).unwrap());
//! let start = Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap();
//! let end = Utc.with_ymd_and_hms(2025, 3, 10, 18, 0, 0).unwrap();
//! let worked = schedule.working_duration(Some(start), Some(end), &Utc);
//! assert_eq!(format_working_duration(&worked), "7h");
//! ```

pub mod commands;
pub mod db;
pub mod libs;
