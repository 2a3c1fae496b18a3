use super::RecordSource;
use crate::db::pool::DbPool;
use crate::db::queries::fetch_records;
use crate::errors::{AppError, AppResult};
use crate::models::{Record, SourceTable};

/// Reads the `reservations` and `call_logs` tables of a local SQLite store.
///
/// Each fetch opens its own read-only connection so both tables can be
/// fetched at the same time.
pub struct SqliteSource {
    path: String,
}

impl SqliteSource {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }
}

impl RecordSource for SqliteSource {
    fn fetch_table(&self, table: SourceTable, limit: usize) -> AppResult<Vec<Record>> {
        let pool = DbPool::open_existing(&self.path)?;
        fetch_records(&pool.conn, table, limit).map_err(|e| match e {
            AppError::Db(inner) => AppError::fetch(table.table_name(), inner.to_string()),
            other => other,
        })
    }

    fn describe(&self) -> String {
        format!("sqlite:{}", self.path)
    }
}
