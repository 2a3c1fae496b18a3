use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LogLine {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Write an operation line into the `log` table.
pub fn oplog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;
    log::debug!("oplog {operation} {target}: {message}");

    Ok(())
}

/// Most recent log lines first.
pub fn recent(conn: &Connection, limit: usize) -> AppResult<Vec<LogLine>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, operation, IFNULL(target, ''), message
         FROM log
         ORDER BY id DESC
         LIMIT ?1",
    )?;

    let rows = stmt.query_map([limit as i64], |row| {
        Ok(LogLine {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get(3)?,
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
