//! Database layer for tasktime.
//!
//! SQLite persistence for the two inputs of the working-time calculator: the
//! weekly working windows and the holiday calendar. Every connection runs the
//! pending schema migrations before it is used.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasktime::db::{holidays::Holidays, load_schedule, working_hours::WorkHours};
//!
//! let mut hours = WorkHours::new()?;
//! let mut holidays = Holidays::new()?;
//! let schedule = load_schedule(&mut hours, &mut holidays)?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! The calculator itself never touches the database; callers load a
//! [`Schedule`] snapshot once and pass it along.

use crate::libs::schedule::Schedule;
use anyhow::Result;

/// Connection management; opening a [`db::Db`] applies migrations.
pub mod db;

/// Versioned schema changes and their bookkeeping table.
pub mod migrations;

/// Weekly working windows, one row per weekday.
pub mod working_hours;

/// Holiday calendar.
pub mod holidays;

/// Reads every stored window and holiday into an immutable [`Schedule`].
pub fn load_schedule(hours: &mut working_hours::WorkHours, holidays: &mut holidays::Holidays) -> Result<Schedule> {
    let windows = hours.list()?;
    let days_off = holidays.list()?;
    Ok(Schedule::from_rows(windows, days_off))
}
