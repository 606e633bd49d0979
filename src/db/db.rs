use crate::db::migrations::{init_with_migrations, needs_migration};
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "tasktime.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database in the platform data directory.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(&db_file_path)
    }

    /// Opens (or creates) the database at `path` and applies pending migrations.
    ///
    /// An up-to-date database is opened without starting a write transaction.
    pub fn open(path: &Path) -> Result<Db> {
        let mut conn = Connection::open(path)?;
        if needs_migration(&conn)? {
            init_with_migrations(&mut conn)?;
        }

        Ok(Db { conn })
    }
}
