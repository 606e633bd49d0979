//! Per-task duration summary.
//!
//! Collects every number the engine can compute for one task (calendar time,
//! working time, time spent waiting, distance to the due date) and renders
//! them through the formatters. The raw [`TaskReport`] keeps `Duration`
//! values; [`FormattedReport`] holds the display strings and serializes to
//! JSON for machine consumers.

use crate::libs::duration::{duration_until, time_difference, TaskSpan};
use crate::libs::formatter::{format_duration, format_working_duration};
use crate::libs::schedule::Schedule;
use crate::libs::time::format_display;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

const NOT_AVAILABLE: &str = "N/A";

/// Computed durations of one task at a given moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskReport {
    pub span: TaskSpan,
    pub due: Option<DateTime<Utc>>,
    /// Calendar time minus waiting; `None` without a start.
    pub duration: Option<Duration>,
    /// Working time over the task span; `None` without a start.
    pub working: Option<Duration>,
    /// Raw calendar length of the waiting period.
    pub waiting: Duration,
    /// Working time inside the waiting period; `None` unless both ends are set.
    pub waiting_working: Option<Duration>,
    /// Time left until the due date, zero once it has passed.
    pub remaining: Duration,
    /// Distance to the due date and whether it is overdue; `None` without one.
    pub due_difference: Option<(Duration, bool)>,
}

impl TaskReport {
    /// Runs every calculator over `span` as seen at `now`.
    ///
    /// A task without an end is treated as running until `now`.
    pub fn build<Tz: TimeZone>(
        span: &TaskSpan,
        due: Option<DateTime<Utc>>,
        schedule: &Schedule,
        tz: &Tz,
        now: DateTime<Utc>,
    ) -> Self {
        let (duration, working) = match span.start {
            Some(start) => (
                Some(span.calendar_duration(now)),
                Some(schedule.working_duration(Some(start), Some(span.end_or(now)), tz)),
            ),
            None => (None, None),
        };

        let waiting_working = if span.has_waiting_period() {
            Some(schedule.working_duration(span.start_waiting, span.end_waiting, tz))
        } else {
            None
        };

        TaskReport {
            span: *span,
            due,
            duration,
            working,
            waiting: span.waiting_duration(),
            waiting_working,
            remaining: duration_until(due, now),
            due_difference: due.map(|_| time_difference(due, now)),
        }
    }

    /// Renders the report for a reader in `tz`.
    pub fn format<Tz: TimeZone>(&self, tz: &Tz) -> FormattedReport
    where
        Tz::Offset: Display,
    {
        FormattedReport {
            start: format_display(self.span.start, tz),
            end: format_display(self.span.end, tz),
            due: format_display(self.due, tz),
            duration: self.duration.map_or_else(not_available, |d| format_duration(&d)),
            working: self.working.map_or_else(not_available, |d| format_working_duration(&d)),
            waiting_start: format_display(self.span.start_waiting, tz),
            waiting_end: format_display(self.span.end_waiting, tz),
            waiting: format_duration(&self.waiting),
            waiting_working: self.waiting_working.map_or_else(not_available, |d| format_working_duration(&d)),
            remaining: format_duration(&self.remaining),
            due_status: match self.due_difference {
                Some((difference, true)) => format!("overdue by {}", format_duration(&difference)),
                Some((difference, false)) => format!("in {}", format_duration(&difference)),
                None => not_available(),
            },
        }
    }
}

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

/// Display strings of a [`TaskReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedReport {
    pub start: String,
    pub end: String,
    pub due: String,
    pub duration: String,
    pub working: String,
    pub waiting_start: String,
    pub waiting_end: String,
    pub waiting: String,
    pub waiting_working: String,
    pub remaining: String,
    pub due_status: String,
}
