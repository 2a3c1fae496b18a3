use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{Record, SourceTable};
use crate::utils::coerce::{parse_date, text};
use chrono::SecondsFormat;
use rusqlite::{Connection, Row, params};
use serde_json::Value;

/// Sortable form of a record's `created_at`: RFC 3339 UTC with
/// milliseconds, or empty when the value cannot be read. Empty keys sort
/// last under `ORDER BY created_at DESC`.
pub fn created_at_key(value: Option<&Value>) -> String {
    parse_date(value)
        .map(|d| d.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default()
}

/// Newest `created_at` first, capped at `limit`.
pub fn fetch_records(conn: &Connection, table: SourceTable, limit: usize) -> AppResult<Vec<Record>> {
    let sql = format!(
        "SELECT id, created_at, property_id, payload
         FROM {}
         ORDER BY created_at DESC, id DESC
         LIMIT ?1",
        table.table_name()
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([limit as i64], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Mapping DB → Record. The payload wins; the indexed columns only fill gaps,
/// so the original `created_at` text is what callers see.
/// A payload that is not a JSON object leaves just the indexed columns.
fn map_row(row: &Row<'_>) -> rusqlite::Result<Record> {
    let id: i64 = row.get(0)?;
    let created_at: String = row.get(1)?;
    let property_id: String = row.get(2)?;
    let payload: String = row.get(3)?;

    let mut record = match serde_json::from_str::<Value>(&payload) {
        Ok(Value::Object(map)) => map,
        _ => {
            log::warn!("row {id}: payload is not a JSON object, keeping indexed columns only");
            Record::new()
        }
    };

    record.entry("id").or_insert_with(|| Value::from(id));
    if !created_at.is_empty() {
        record
            .entry("created_at")
            .or_insert_with(|| Value::from(created_at));
    }
    if !property_id.is_empty() {
        record
            .entry("property_id")
            .or_insert_with(|| Value::from(property_id));
    }

    Ok(record)
}

/// The indexed `created_at` column holds the normalized sort key; the
/// payload keeps the value as it was imported.
pub fn insert_record(conn: &Connection, table: SourceTable, record: &Record) -> AppResult<()> {
    let sql = format!(
        "INSERT INTO {} (created_at, property_id, payload) VALUES (?1, ?2, ?3)",
        table.table_name()
    );
    let payload = serde_json::to_string(record)?;
    conn.execute(
        &sql,
        params![
            created_at_key(record.get("created_at")),
            text(record.get("property_id")),
            payload
        ],
    )?;
    Ok(())
}

/// Insert all records in one transaction. Returns the number inserted.
pub fn import_records(pool: &mut DbPool, table: SourceTable, records: &[Record]) -> AppResult<usize> {
    pool.with_conn(|conn| {
        let tx = conn.transaction()?;
        for record in records {
            insert_record(&tx, table, record)?;
        }
        tx.commit()?;
        Ok(records.len())
    })
}

pub fn count_records(conn: &Connection, table: SourceTable) -> AppResult<i64> {
    let sql = format!("SELECT COUNT(*) FROM {}", table.table_name());
    Ok(conn.query_row(&sql, [], |row| row.get(0))?)
}
