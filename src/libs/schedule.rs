//! Weekly working schedule, holiday calendar and the working-hours calculator.
//!
//! A [`Schedule`] is an immutable snapshot handed to the calculator by the
//! caller: at most one [`WorkingHours`] window per weekday plus a set of
//! [`Holiday`] dates. Nothing here reads the database or the process zone;
//! the reference zone is always an explicit argument.
//!
//! ## Working time of an interval
//!
//! ```text
//!   day:      |  Mon            |  Tue            |  Wed            |
//!   window:   |   [09:00-17:00) |   [09:00-17:00) |   holiday       |
//!   interval:        [Mon 11:00 ..................... Wed 10:00]
//!   counted:      [11:00-17:00) - break  [09:00-17:00) - break   0
//! ```
//!
//! Each calendar day touched by the interval contributes the overlap between
//! its window and the interval, minus the configured break. A break that eats
//! the whole overlap zeroes the day; a day never goes negative.
//!
//! Windows whose end is numerically before their start run past midnight into
//! the next calendar day (night shifts). A window whose start equals its end
//! has no capacity.

use crate::libs::error::ScheduleError;
use crate::libs::time::{intersection, resolve_local_forward};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use std::collections::{BTreeMap, HashMap};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Converts a 0-based weekday index (0 = Sunday ... 6 = Saturday).
pub fn weekday_from_index(index: u32) -> Result<Weekday, ScheduleError> {
    match index {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        other => Err(ScheduleError::InvalidWeekday(other)),
    }
}

/// Inverse of [`weekday_from_index`].
pub fn weekday_index(weekday: Weekday) -> u32 {
    weekday.num_days_from_sunday()
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Working window configured for one weekday.
///
/// `end_hour` may be 24 to close the window at the following midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingHours {
    pub weekday: Weekday,
    pub start_hour: u32,
    pub start_minute: u32,
    pub end_hour: u32,
    pub end_minute: u32,
    /// Break deducted once from every day that contributes working time.
    pub break_minutes: u32,
}

impl WorkingHours {
    /// Builds a validated window.
    ///
    /// # Errors
    ///
    /// Returns a [`ScheduleError`] when a field is out of range, when the end
    /// is `24:mm` with `mm > 0`, or when start and end coincide.
    pub fn new(
        weekday: Weekday,
        start_hour: u32,
        start_minute: u32,
        end_hour: u32,
        end_minute: u32,
        break_minutes: u32,
    ) -> Result<Self, ScheduleError> {
        if start_hour > 23 {
            return Err(ScheduleError::InvalidStartHour(start_hour));
        }
        if end_hour > 24 {
            return Err(ScheduleError::InvalidEndHour(end_hour));
        }
        for minute in [start_minute, end_minute] {
            if minute > 59 {
                return Err(ScheduleError::InvalidMinute(minute));
            }
        }
        if end_hour == 24 && end_minute > 0 {
            return Err(ScheduleError::PastMidnight(end_minute));
        }

        let hours = Self {
            weekday,
            start_hour,
            start_minute,
            end_hour,
            end_minute,
            break_minutes,
        };
        if hours.start_minutes() == hours.end_minutes() {
            return Err(ScheduleError::EmptyWindow {
                start: hours.start_label(),
                end: hours.end_label(),
            });
        }
        Ok(hours)
    }

    /// Start of the window in minutes after midnight.
    pub fn start_minutes(&self) -> u32 {
        self.start_hour * 60 + self.start_minute
    }

    /// End of the window in minutes after midnight (may be 1440).
    pub fn end_minutes(&self) -> u32 {
        self.end_hour * 60 + self.end_minute
    }

    /// True when the window crosses midnight into the next day.
    pub fn is_overnight(&self) -> bool {
        self.end_minutes() < self.start_minutes()
    }

    pub fn break_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.break_minutes))
    }

    pub fn start_label(&self) -> String {
        format!("{:02}:{:02}", self.start_hour, self.start_minute)
    }

    pub fn end_label(&self) -> String {
        format!("{:02}:{:02}", self.end_hour, self.end_minute)
    }

    /// Concrete `[start, end)` instants of this window on `day` in `tz`.
    ///
    /// Returns `None` for a window without capacity.
    pub fn window_on<Tz: TimeZone>(&self, day: NaiveDate, tz: &Tz) -> Option<(DateTime<Tz>, DateTime<Tz>)> {
        let start_minutes = self.start_minutes();
        let mut end_minutes = self.end_minutes();
        if start_minutes == end_minutes {
            return None;
        }
        if end_minutes < start_minutes {
            end_minutes += MINUTES_PER_DAY;
        }

        let midnight = day.and_time(NaiveTime::MIN);
        let start = resolve_local_forward(tz, &(midnight + Duration::minutes(i64::from(start_minutes))))?;
        let end = resolve_local_forward(tz, &(midnight + Duration::minutes(i64::from(end_minutes))))?;
        Some((start, end))
    }
}

/// A named day off. Lookup is by date only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub name: String,
}

impl Holiday {
    pub fn new(date: NaiveDate, name: &str) -> Self {
        Holiday {
            id: None,
            date,
            name: name.to_string(),
        }
    }
}

/// Immutable snapshot of the weekly windows and the holiday calendar.
///
/// Safe to share between threads for a batch of calculations as long as the
/// snapshot is not rebuilt in the middle of it.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    hours: HashMap<Weekday, WorkingHours>,
    holidays: BTreeMap<NaiveDate, Holiday>,
}

impl Schedule {
    pub fn new(hours: HashMap<Weekday, WorkingHours>, holidays: BTreeMap<NaiveDate, Holiday>) -> Self {
        Schedule { hours, holidays }
    }

    /// Builds a snapshot from stored rows.
    ///
    /// A later window for the same weekday replaces an earlier one; for
    /// holidays the first row seen for a date wins.
    pub fn from_rows<H, D>(hours: H, holidays: D) -> Self
    where
        H: IntoIterator<Item = WorkingHours>,
        D: IntoIterator<Item = Holiday>,
    {
        let mut schedule = Schedule::default();
        for window in hours {
            schedule = schedule.with_hours(window);
        }
        for holiday in holidays {
            schedule = schedule.with_holiday(holiday);
        }
        schedule
    }

    pub fn with_hours(mut self, hours: WorkingHours) -> Self {
        self.hours.insert(hours.weekday, hours);
        self
    }

    pub fn with_holiday(mut self, holiday: Holiday) -> Self {
        self.holidays.entry(holiday.date).or_insert(holiday);
        self
    }

    pub fn hours_for(&self, weekday: Weekday) -> Option<&WorkingHours> {
        self.hours.get(&weekday)
    }

    pub fn holiday_on(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.get(&date)
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    /// Total working time contained in the interval between `start` and `end`.
    ///
    /// The endpoints may come in either order. If either one is absent the
    /// result is zero. Days are walked in `tz`, from the local date of the
    /// earlier endpoint through the local date of the later one.
    pub fn working_duration<Tz: TimeZone>(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        tz: &Tz,
    ) -> Duration {
        let (Some(start), Some(end)) = (start, end) else {
            return Duration::zero();
        };

        let mut start = start.with_timezone(tz);
        let mut end = end.with_timezone(tz);
        if start > end {
            std::mem::swap(&mut start, &mut end);
        }

        let last_day = end.date_naive();
        let mut day = start.date_naive();
        let mut total = Duration::zero();

        while day <= last_day {
            total = total + self.day_contribution(day, &start, &end, tz);
            day = match day.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }

        total
    }

    fn day_contribution<Tz: TimeZone>(
        &self,
        day: NaiveDate,
        start: &DateTime<Tz>,
        end: &DateTime<Tz>,
        tz: &Tz,
    ) -> Duration {
        if self.holidays.contains_key(&day) {
            return Duration::zero();
        }

        let Some(hours) = self.hours.get(&day.weekday()) else {
            return Duration::zero();
        };
        let Some((work_start, work_end)) = hours.window_on(day, tz) else {
            return Duration::zero();
        };

        match intersection(start.clone(), end.clone(), work_start, work_end) {
            Some((from, to)) => {
                let worked = to - from;
                let pause = hours.break_duration();
                if worked > pause {
                    worked - pause
                } else {
                    Duration::zero()
                }
            }
            None => Duration::zero(),
        }
    }
}
