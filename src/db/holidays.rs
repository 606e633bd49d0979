use crate::db::db::Db;
use crate::libs::schedule::Holiday;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const INSERT_HOLIDAY: &str = "INSERT INTO holidays (date, name) VALUES (?1, ?2)";
const SELECT_HOLIDAYS: &str = "SELECT id, date, name FROM holidays ORDER BY date ASC, id ASC";
const SELECT_HOLIDAY_BY_DATE: &str = "SELECT id, date, name FROM holidays WHERE date = ?1 ORDER BY id ASC LIMIT 1";
const SELECT_HOLIDAY_IDS: &str = "SELECT id FROM holidays WHERE id IN";
const DELETE_HOLIDAYS: &str = "DELETE FROM holidays WHERE id IN";
const DELETE_ALL_HOLIDAYS: &str = "DELETE FROM holidays";

pub struct Holidays {
    conn: Connection,
}

impl Holidays {
    pub fn new() -> Result<Self> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn from_db(db: Db) -> Self {
        Holidays { conn: db.conn }
    }

    /// Adds a holiday and returns its id.
    pub fn insert(&mut self, holiday: &Holiday) -> Result<i64> {
        self.conn.execute(INSERT_HOLIDAY, params![holiday.date, holiday.name])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All holidays ordered by date; rows sharing a date keep insertion order.
    pub fn list(&mut self) -> Result<Vec<Holiday>> {
        let mut stmt = self.conn.prepare(SELECT_HOLIDAYS)?;
        let holiday_iter = stmt.query_map([], row_to_holiday)?;

        let mut holidays = Vec::new();
        for holiday in holiday_iter {
            holidays.push(holiday?);
        }
        Ok(holidays)
    }

    /// The holiday that lookups by `date` resolve to (the oldest row).
    pub fn fetch_by_date(&mut self, date: NaiveDate) -> Result<Option<Holiday>> {
        self.conn
            .query_row(SELECT_HOLIDAY_BY_DATE, params![date], row_to_holiday)
            .optional()
            .map_err(Into::into)
    }

    /// Returns which of `ids` exist.
    pub fn existing_ids(&mut self, ids: &[i64]) -> Result<Vec<i64>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!("{} ({})", SELECT_HOLIDAY_IDS, vec!["?"; ids.len()].join(", "));
        let mut stmt = self.conn.prepare(&query)?;
        let id_iter = stmt.query_map(params_from_iter(ids.iter()), |row| row.get(0))?;

        let mut found = Vec::new();
        for id in id_iter {
            found.push(id?);
        }
        Ok(found)
    }

    /// Deletes the holidays with the given ids; returns how many were removed.
    pub fn delete(&mut self, ids: &[i64]) -> Result<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        let query = format!("{} ({})", DELETE_HOLIDAYS, vec!["?"; ids.len()].join(", "));
        Ok(self.conn.execute(&query, params_from_iter(ids.iter()))?)
    }

    pub fn delete_all(&mut self) -> Result<usize> {
        Ok(self.conn.execute(DELETE_ALL_HOLIDAYS, [])?)
    }
}

fn row_to_holiday(row: &Row) -> rusqlite::Result<Holiday> {
    Ok(Holiday {
        id: Some(row.get(0)?),
        date: row.get(1)?,
        name: row.get(2)?,
    })
}
