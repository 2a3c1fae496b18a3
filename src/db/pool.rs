//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::initialize::init_db;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (creating if needed) and migrate the store.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    /// Open an existing store without creating or migrating it. Used by the
    /// read path so a wrong `--db` never leaves an empty file behind.
    pub fn open_existing(path: &str) -> AppResult<Self> {
        if !Path::new(path).exists() {
            return Err(AppError::MissingCredentials(format!(
                "database not found: {path} (run `opsdash init`)"
            )));
        }
        let conn = Connection::open_with_flags(
            Path::new(path),
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut Connection) -> AppResult<T>,
    {
        func(&mut self.conn)
    }
}
