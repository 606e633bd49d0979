//! Calendar-time calculators for a task's timeline.
//!
//! These measure plain elapsed time between UTC instants; no schedule is
//! involved. "Now" is always passed in by the caller so the results are
//! reproducible.

use crate::libs::time::overlap;
use chrono::{DateTime, Duration, Utc};

/// The instants of a task that take part in duration arithmetic.
///
/// `end` is `None` while the task is still running. The waiting pair marks a
/// pause whose overlap with the task is excluded from the calendar duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskSpan {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub start_waiting: Option<DateTime<Utc>>,
    pub end_waiting: Option<DateTime<Utc>>,
}

impl TaskSpan {
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        TaskSpan {
            start,
            end,
            ..Default::default()
        }
    }

    pub fn with_waiting(mut self, start_waiting: Option<DateTime<Utc>>, end_waiting: Option<DateTime<Utc>>) -> Self {
        self.start_waiting = start_waiting;
        self.end_waiting = end_waiting;
        self
    }

    /// End of the span, falling back to `now` for a running task.
    pub fn end_or(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.end.unwrap_or(now)
    }

    /// Elapsed calendar time minus the part spent waiting.
    ///
    /// Zero when the start is unknown. A running task is measured up to
    /// `now`. Reversed endpoints are swapped first. The waiting period only
    /// counts when both its endpoints are known and properly ordered, and
    /// only the part inside the task span is removed.
    pub fn calendar_duration(&self, now: DateTime<Utc>) -> Duration {
        let Some(mut start) = self.start else {
            return Duration::zero();
        };
        let mut end = self.end_or(now);
        if start > end {
            std::mem::swap(&mut start, &mut end);
        }

        let total = end - start;
        let waiting = match (self.start_waiting, self.end_waiting) {
            (Some(wait_start), Some(wait_end)) if wait_start < wait_end => overlap(start, end, wait_start, wait_end),
            _ => Duration::zero(),
        };

        total - waiting
    }

    /// Raw length of the waiting period, regardless of the task span.
    ///
    /// Zero when either endpoint is missing or the period is reversed.
    pub fn waiting_duration(&self) -> Duration {
        match (self.start_waiting, self.end_waiting) {
            (Some(wait_start), Some(wait_end)) if wait_start <= wait_end => wait_end - wait_start,
            _ => Duration::zero(),
        }
    }

    pub fn has_waiting_period(&self) -> bool {
        self.start_waiting.is_some() && self.end_waiting.is_some()
    }
}

/// Time left until `target`.
///
/// Zero when the target is unknown or not in the future; overdue targets are
/// reported by [`time_difference`] instead.
pub fn duration_until(target: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Duration {
    match target {
        Some(target) if target > now => target - now,
        _ => Duration::zero(),
    }
}

/// Distance between `target` and `now`, with whether the target is past.
///
/// The magnitude is never negative. An unknown target gives `(0, false)`.
pub fn time_difference(target: Option<DateTime<Utc>>, now: DateTime<Utc>) -> (Duration, bool) {
    match target {
        Some(target) if target < now => (now - target, true),
        Some(target) => (target - now, false),
        None => (Duration::zero(), false),
    }
}
