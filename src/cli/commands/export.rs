use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export;
use crate::models::category::Category;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        category,
        force,
    } = cmd
    {
        let cat = Category::from_code(category)
            .ok_or_else(|| AppError::InvalidCategory(category.clone()))?;

        let target = expand_tilde(file);
        let target = target.to_string_lossy();

        let mut pool = DbPool::new(&cfg.database)?;
        export::export_category(&mut pool, cat, format, &target, *force)?;
    }
    Ok(())
}
