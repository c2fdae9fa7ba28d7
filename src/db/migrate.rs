use crate::ui::messages::warning;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `records` table exists: one row per category, holding the
/// JSON-serialized record sequence for that category.
fn ensure_records_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS records (
            category  TEXT PRIMARY KEY,
            payload   TEXT NOT NULL DEFAULT '[]',
            updated_at TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

/// Ensure that the `app_state` table exists (session, theme, pinned place).
fn ensure_app_state_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS app_state (
            key    TEXT PRIMARY KEY,
            value  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Ensure that the `log` table exists with the modern schema.
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

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Early versions stored the per-category payloads in a table named
/// `history`. Rename it so existing data keeps working.
fn migrate_history_to_records(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "history")? {
        return Ok(());
    }
    if table_exists(conn, "records")? {
        return Ok(()); // already migrated
    }

    warning("Renaming legacy 'history' table to 'records'...");
    conn.execute_batch("ALTER TABLE history RENAME TO records;")?;
    Ok(())
}

/// Run every pending migration in order. Idempotent.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    migrate_history_to_records(conn)?;
    ensure_records_table(conn)?;
    ensure_app_state_table(conn)?;
    ensure_log_table(conn)?;
    Ok(())
}
