//! Durable per-category log store.
//!
//! Each category owns one row of the `records` table; the payload column
//! holds the whole collection as a JSON array. Loads apply the retention
//! window and persist the filtered collection, so expiry survives restarts.
//!
//! Every operation is a read-modify-write of one payload. Callers hold
//! `&mut DbPool`, so accesses are serialized; a multi-threaded host must
//! keep that exclusivity (one owner or a mutex around the pool).

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::category::Category;
use crate::models::record::LogRecord;
use crate::utils::date::now_millis;
use chrono::Local;
use rusqlite::{OptionalExtension, params};

/// Records older than this are dropped on the next load (3 days).
pub const RETENTION_MS: i64 = 259_200_000;

fn read_payload(pool: &mut DbPool, category: Category) -> AppResult<Option<String>> {
    let mut stmt = pool
        .conn
        .prepare_cached("SELECT payload FROM records WHERE category = ?1")?;
    let payload: Option<String> = stmt
        .query_row([category.storage_key()], |row| row.get(0))
        .optional()?;
    Ok(payload)
}

fn write_payload(pool: &mut DbPool, category: Category, payload: &str) -> AppResult<()> {
    let mut stmt = pool.conn.prepare_cached(
        "INSERT INTO records (category, payload, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(category) DO UPDATE SET payload = ?2, updated_at = ?3",
    )?;
    stmt.execute(params![
        category.storage_key(),
        payload,
        Local::now().to_rfc3339()
    ])?;
    Ok(())
}

/// Decode a stored payload. An unparsable payload is treated as "no data",
/// never as a fatal error.
fn decode(payload: &str) -> Vec<LogRecord> {
    serde_json::from_str(payload).unwrap_or_default()
}

/// Load a category's records as of `now_ms`, dropping everything outside the
/// retention window. The filtered collection is written back when anything
/// was dropped, so the expiry is durable.
pub fn load_at(pool: &mut DbPool, category: Category, now_ms: i64) -> AppResult<Vec<LogRecord>> {
    let Some(payload) = read_payload(pool, category)? else {
        return Ok(Vec::new());
    };

    let records = decode(&payload);
    let before = records.len();

    let fresh: Vec<LogRecord> = records
        .into_iter()
        .filter(|r| r.is_fresh(now_ms, RETENTION_MS))
        .collect();

    if fresh.len() != before {
        write_payload(pool, category, &serde_json::to_string(&fresh)?)?;
    }

    Ok(fresh)
}

/// Load a category's records, applying the retention window against the
/// current clock.
pub fn load(pool: &mut DbPool, category: Category) -> AppResult<Vec<LogRecord>> {
    load_at(pool, category, now_millis())
}

/// Append one record as of `now_ms`.
///
/// The record is normalized, stamped with `now_ms` if it carries no
/// timestamp, and merged into the persisted collection. Emergency pins
/// deduplicate against entries sharing the same `(lat, lng, event)` key: the
/// older entry is dropped and the new one appended, so exactly one record
/// per key survives and its timestamp reflects the latest report.
pub fn append_at(
    pool: &mut DbPool,
    category: Category,
    record: LogRecord,
    now_ms: i64,
) -> AppResult<()> {
    let mut records = load_at(pool, category, now_ms)?;

    let mut record = record.normalized();
    if record.timestamp.is_none() {
        record.timestamp = Some(now_ms);
    }

    if category == Category::Emergencies {
        records.retain(|r| !r.same_pin(&record));
    }

    // Insertion order is recency: most recent last.
    records.push(record);

    write_payload(pool, category, &serde_json::to_string(&records)?)
}

/// Append one record, stamping it with the current clock.
pub fn append(pool: &mut DbPool, category: Category, record: LogRecord) -> AppResult<()> {
    append_at(pool, category, record, now_millis())
}

/// Remove every persisted record for a category. Used on logout.
pub fn clear(pool: &mut DbPool, category: Category) -> AppResult<()> {
    pool.conn.execute(
        "DELETE FROM records WHERE category = ?1",
        [category.storage_key()],
    )?;
    Ok(())
}

/// Raw stored payload for a category, bypassing decode and retention.
/// Exposed for maintenance/info views only.
pub fn raw_payload(pool: &mut DbPool, category: Category) -> AppResult<Option<String>> {
    read_payload(pool, category)
}
