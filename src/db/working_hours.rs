//! Storage for the weekly working windows.
//!
//! One row per weekday (`day_of_week` 0 = Sunday ... 6 = Saturday). Rows are
//! validated by [`WorkingHours::new`] before they get here; reading does not
//! re-validate, the calculator already treats a window without capacity as
//! contributing nothing.

use crate::db::db::Db;
use crate::libs::schedule::{weekday_from_index, weekday_index, WorkingHours};
use anyhow::Result;
use chrono::Weekday;
use rusqlite::types::Type;
use rusqlite::{params, params_from_iter, Connection, Row};

const UPDATE_HOURS: &str = "UPDATE working_hours
    SET start_hour = ?2, start_minute = ?3, end_hour = ?4, end_minute = ?5, break_minutes = ?6
    WHERE day_of_week = ?1";
const INSERT_HOURS: &str = "INSERT INTO working_hours (day_of_week, start_hour, start_minute, end_hour, end_minute, break_minutes)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_HOURS: &str = "SELECT day_of_week, start_hour, start_minute, end_hour, end_minute, break_minutes
    FROM working_hours ORDER BY day_of_week ASC";
const DELETE_ALL_HOURS: &str = "DELETE FROM working_hours";
const DELETE_HOURS_FOR_DAYS: &str = "DELETE FROM working_hours WHERE day_of_week IN";

pub struct WorkHours {
    conn: Connection,
}

impl WorkHours {
    pub fn new() -> Result<Self> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn from_db(db: Db) -> Self {
        WorkHours { conn: db.conn }
    }

    /// Stores the window for its weekday, replacing any previous one.
    ///
    /// Returns `true` when a new row was inserted and `false` when an existing
    /// weekday was updated.
    pub fn set(&mut self, hours: &WorkingHours) -> Result<bool> {
        let day = weekday_index(hours.weekday);

        let updated = self.conn.execute(
            UPDATE_HOURS,
            params![day, hours.start_hour, hours.start_minute, hours.end_hour, hours.end_minute, hours.break_minutes],
        )?;
        if updated > 0 {
            return Ok(false);
        }

        self.conn.execute(
            INSERT_HOURS,
            params![day, hours.start_hour, hours.start_minute, hours.end_hour, hours.end_minute, hours.break_minutes],
        )?;
        Ok(true)
    }

    /// All configured windows, Sunday first.
    pub fn list(&mut self) -> Result<Vec<WorkingHours>> {
        let mut stmt = self.conn.prepare(SELECT_HOURS)?;
        let hours_iter = stmt.query_map([], row_to_hours)?;

        let mut hours = Vec::new();
        for window in hours_iter {
            hours.push(window?);
        }
        Ok(hours)
    }

    /// Removes the windows of the given weekdays; returns how many existed.
    pub fn delete_days(&mut self, days: &[Weekday]) -> Result<usize> {
        if days.is_empty() {
            return Ok(0);
        }

        let placeholders = vec!["?"; days.len()].join(", ");
        let indexes: Vec<u32> = days.iter().map(|day| weekday_index(*day)).collect();
        let deleted = self.conn.execute(
            &format!("{} ({})", DELETE_HOURS_FOR_DAYS, placeholders),
            params_from_iter(indexes.iter()),
        )?;
        Ok(deleted)
    }

    pub fn delete_all(&mut self) -> Result<usize> {
        Ok(self.conn.execute(DELETE_ALL_HOURS, [])?)
    }
}

fn row_to_hours(row: &Row) -> rusqlite::Result<WorkingHours> {
    let day: u32 = row.get(0)?;
    let weekday = weekday_from_index(day).map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Integer, Box::new(e)))?;

    Ok(WorkingHours {
        weekday,
        start_hour: row.get(1)?,
        start_minute: row.get(2)?,
        end_hour: row.get(3)?,
        end_minute: row.get(4)?,
        break_minutes: row.get(5)?,
    })
}
