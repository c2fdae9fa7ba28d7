use crate::errors::AppResult;
use crate::export::model::RecordExport;

/// Write the rows as pretty-printed JSON.
pub fn write_json(path: &str, rows: &[RecordExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;
    Ok(())
}
