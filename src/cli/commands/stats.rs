use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::{count_by_city, count_by_month};
use crate::db::pool::DbPool;
use crate::db::store;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { by, category } = cmd {
        let cat = Category::from_code(category)
            .ok_or_else(|| AppError::InvalidCategory(category.clone()))?;

        let mut pool = DbPool::new(&cfg.database)?;
        let records = store::load(&mut pool, cat)?;

        match by.to_lowercase().as_str() {
            "city" => {
                println!("📊 {} by city (top 10):\n", cat.label());
                let mut table = Table::new(&["City", "Count"]);
                for entry in count_by_city(&records) {
                    table.add_row(vec![entry.city, entry.count.to_string()]);
                }
                print!("{}", table.render());
            }
            "month" => {
                println!("📊 {} by month:\n", cat.label());
                let mut table = Table::new(&["Month", "Count"]);
                for entry in count_by_month(&records) {
                    table.add_row(vec![entry.label, entry.count.to_string()]);
                }
                print!("{}", table.render());
            }
            other => return Err(AppError::InvalidGrouping(other.to_string())),
        }
    }
    Ok(())
}
