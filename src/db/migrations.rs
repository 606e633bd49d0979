//! Versioned schema for the tasktime database.
//!
//! Each [`Migration`] carries the SQL that brings the schema from the previous
//! version to its own. Applied versions are recorded in the `migrations`
//! bookkeeping table, and every pending step runs inside one transaction when
//! a connection is opened: either the database ends up at the latest version
//! or it is left untouched.
//!
//! ```rust,no_run
//! use rusqlite::Connection;
//! use tasktime::db::migrations::{get_db_version, init_with_migrations};
//!
//! let mut conn = Connection::open("tasktime.db")?;
//! init_with_migrations(&mut conn)?;
//! assert_eq!(get_db_version(&conn)?, 2);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const CREATE_MIGRATIONS_TABLE: &str = "CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";
const SELECT_SCHEMA_VERSION: &str = "SELECT MAX(version) FROM migrations";
const RECORD_MIGRATION: &str = "INSERT INTO migrations (version, name) VALUES (?1, ?2)";

/// One schema step.
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub version: u32,
    pub name: &'static str,
    sql: &'static str,
}

/// All schema steps, oldest first. Versions must stay strictly increasing.
const MIGRATIONS: &[Migration] = &[
    // Weekly working windows, one row per weekday (0 = Sunday)
    Migration {
        version: 1,
        name: "create_working_hours",
        sql: "CREATE TABLE IF NOT EXISTS working_hours (
            id INTEGER PRIMARY KEY,
            day_of_week INTEGER NOT NULL UNIQUE,
            start_hour INTEGER NOT NULL,
            start_minute INTEGER NOT NULL DEFAULT 0,
            end_hour INTEGER NOT NULL,
            end_minute INTEGER NOT NULL DEFAULT 0,
            break_minutes INTEGER NOT NULL DEFAULT 0
        );",
    },
    // Holiday calendar, looked up by date
    Migration {
        version: 2,
        name: "create_holidays",
        sql: "CREATE TABLE IF NOT EXISTS holidays (
            id INTEGER PRIMARY KEY,
            date DATE NOT NULL,
            name TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_holidays_date ON holidays(date);",
    },
];

/// Applies and inspects [`MIGRATIONS`].
pub struct MigrationManager {
    migrations: &'static [Migration],
}

impl MigrationManager {
    pub fn new() -> Self {
        MigrationManager { migrations: MIGRATIONS }
    }

    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map_or(0, |migration| migration.version)
    }

    /// Schema version recorded in `conn`; 0 for a database never migrated.
    pub fn current_version(&self, conn: &Connection) -> Result<u32> {
        let has_table: Option<i64> = conn
            .query_row(
                "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'migrations'",
                [],
                |row| row.get(0),
            )
            .optional()?;
        if has_table.is_none() {
            return Ok(0);
        }

        let version: Option<u32> = conn.query_row(SELECT_SCHEMA_VERSION, [], |row| row.get(0))?;
        Ok(version.unwrap_or(0))
    }

    /// Runs every step newer than the recorded version in a single transaction.
    pub fn run(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(CREATE_MIGRATIONS_TABLE, [])?;

        let current = self.current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current).collect();
        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }
        msg_debug!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;
        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            if let Err(e) = tx.execute_batch(migration.sql) {
                msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                return Err(e.into());
            }
            tx.execute(RECORD_MIGRATION, params![migration.version, migration.name])?;
            msg_debug!(Message::MigrationCompleted(migration.version));
        }
        tx.commit()?;

        msg_debug!(Message::AllMigrationsCompleted);
        Ok(())
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Brings `conn` to the latest schema version.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run(conn)
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    Ok(manager.current_version(conn)? < manager.latest_version())
}
