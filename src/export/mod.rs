mod csv;
mod json;
mod model;

pub use model::RecordExport;

use crate::db::pool::DbPool;
use crate::db::store;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Export one category's current records (retention applied) to a file.
pub fn export_category(
    pool: &mut DbPool,
    category: Category,
    format: &ExportFormat,
    file: &str,
    force: bool,
) -> AppResult<()> {
    let path = Path::new(file);
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "File already exists: {} (use --force to overwrite)",
            file
        )));
    }

    let records = store::load(pool, category)?;
    let rows: Vec<RecordExport> = records
        .iter()
        .map(|r| RecordExport::from_record(category, r))
        .collect();

    match format {
        ExportFormat::Csv => csv::write_csv(file, &rows)?,
        ExportFormat::Json => json::write_json(file, &rows)?,
    }

    success(format!(
        "{} export completed: {} ({} records)",
        format.as_str().to_uppercase(),
        file,
        rows.len()
    ));
    Ok(())
}
