use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the record store.
/// All schema creation goes through the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}
