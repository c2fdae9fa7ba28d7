//! Key-value storage for application state (session user, theme, pinned
//! place, view state). Values are stored as JSON strings.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use rusqlite::{OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const KEY_USER: &str = "user";
pub const KEY_THEME: &str = "theme";
pub const KEY_PINNED: &str = "pinned-place";
pub const KEY_VIEW: &str = "view-state";

pub fn get_raw(pool: &mut DbPool, key: &str) -> AppResult<Option<String>> {
    let mut stmt = pool
        .conn
        .prepare_cached("SELECT value FROM app_state WHERE key = ?1")?;
    let value: Option<String> = stmt.query_row([key], |row| row.get(0)).optional()?;
    Ok(value)
}

/// Read a JSON value. A corrupt stored value degrades to `None` rather than
/// failing the caller.
pub fn get_json<T: DeserializeOwned>(pool: &mut DbPool, key: &str) -> AppResult<Option<T>> {
    let Some(raw) = get_raw(pool, key)? else {
        return Ok(None);
    };
    Ok(serde_json::from_str(&raw).ok())
}

pub fn set_json<T: Serialize>(pool: &mut DbPool, key: &str, value: &T) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    let mut stmt = pool.conn.prepare_cached(
        "INSERT INTO app_state (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = ?2",
    )?;
    stmt.execute(params![key, raw])?;
    Ok(())
}

pub fn delete(pool: &mut DbPool, key: &str) -> AppResult<()> {
    pool.conn
        .execute("DELETE FROM app_state WHERE key = ?1", [key])?;
    Ok(())
}
