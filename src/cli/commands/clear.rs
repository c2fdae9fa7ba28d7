use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::store;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { category } = cmd {
        //
        // Resolve the target categories
        //
        let targets: Vec<Category> = if category.to_lowercase() == "all" {
            Category::all().to_vec()
        } else {
            vec![
                Category::from_code(category)
                    .ok_or_else(|| AppError::InvalidCategory(category.clone()))?,
            ]
        };

        //
        // Confirmation prompt
        //
        let names: Vec<&str> = targets.iter().map(|c| c.storage_key()).collect();
        let prompt = format!(
            "Drop all recorded activity for {}? This action is irreversible.",
            names.join(", ")
        );

        if !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute
        //
        let mut pool = DbPool::new(&cfg.database)?;

        for target in &targets {
            store::clear(&mut pool, *target)?;
            oplog(
                &pool.conn,
                "clear",
                target.storage_key(),
                "activity dropped",
            )?;
        }

        success(format!("Cleared: {}.", names.join(", ")));
    }

    Ok(())
}
