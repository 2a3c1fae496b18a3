use crate::db::queries::created_at_key;
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result, params};
use serde_json::Value;

/// Ensure that the `log` table exists. Migrations record themselves there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Both record tables share one layout: indexed columns for ordering and
/// filtering, plus the full source record as JSON.
fn create_record_table(conn: &Connection, table: &str) -> Result<()> {
    conn.execute_batch(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table} (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            created_at   TEXT NOT NULL DEFAULT '',
            property_id  TEXT NOT NULL DEFAULT '',
            payload      TEXT NOT NULL DEFAULT '{{}}'
        );
        "#
    ))?;
    Ok(())
}

fn migrate_create_record_tables(conn: &Connection) -> Result<()> {
    let version = "20250301_0001_create_record_tables";
    if migration_applied(conn, version)? {
        return Ok(());
    }

    for table in ["reservations", "call_logs"] {
        if !table_exists(conn, table)? {
            create_record_table(conn, table)?;
            success(format!("Created {table} table."));
        }
    }

    mark_applied(conn, version, "Created reservations and call_logs tables")
}

fn migrate_add_created_at_indexes(conn: &Connection) -> Result<()> {
    let version = "20250318_0002_created_at_indexes";
    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_reservations_created ON reservations(created_at DESC);
        CREATE INDEX IF NOT EXISTS idx_call_logs_created ON call_logs(created_at DESC);
        CREATE INDEX IF NOT EXISTS idx_reservations_property ON reservations(property_id);
        CREATE INDEX IF NOT EXISTS idx_call_logs_property ON call_logs(property_id);
        "#,
    )?;

    mark_applied(conn, version, "Added created_at and property_id indexes")?;
    success(format!("Migration applied: {version}"));
    Ok(())
}

/// Rewrite the indexed `created_at` column of older stores, which held the
/// raw imported text, as the normalized sort key taken from the payload.
fn migrate_normalize_created_at(conn: &Connection) -> Result<()> {
    let version = "20250402_0003_normalize_created_at";
    if migration_applied(conn, version)? {
        return Ok(());
    }

    let mut rewritten = 0usize;
    for table in ["reservations", "call_logs"] {
        let rows: Vec<(i64, String)> = {
            let mut stmt = conn.prepare(&format!("SELECT id, payload FROM {table}"))?;
            stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
                .collect::<Result<_>>()?
        };

        let mut update =
            conn.prepare(&format!("UPDATE {table} SET created_at = ?1 WHERE id = ?2"))?;
        for (id, payload) in rows {
            let created = serde_json::from_str::<Value>(&payload)
                .ok()
                .and_then(|v| v.get("created_at").cloned());
            update.execute(params![created_at_key(created.as_ref()), id])?;
            rewritten += 1;
        }
    }

    mark_applied(
        conn,
        version,
        &format!("Normalized created_at on {rewritten} row(s)"),
    )?;
    success(format!("Migration applied: {version}"));
    Ok(())
}

/// Public entry point: run all pending migrations.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    migrate_create_record_tables(conn)?;
    migrate_add_created_at_indexes(conn)?;
    migrate_normalize_created_at(conn)?;
    Ok(())
}
