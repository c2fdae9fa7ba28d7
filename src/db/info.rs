use crate::db::pool::DbPool;
use crate::db::store;
use crate::errors::AppResult;
use crate::models::category::Category;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) RECORDS PER CATEGORY
    //
    for category in Category::all() {
        let count = match store::raw_payload(pool, category)? {
            Some(payload) => serde_json::from_str::<serde_json::Value>(&payload)
                .ok()
                .and_then(|v| v.as_array().map(|a| a.len()))
                .unwrap_or(0),
            None => 0,
        };

        let fmt_count = if count == 0 {
            format!("{GREY}0{RESET}")
        } else {
            format!("{GREEN}{count}{RESET}")
        };
        println!(
            "{}• {}:{} {}",
            CYAN,
            category.label(),
            RESET,
            fmt_count
        );
    }

    //
    // 3) APP STATE / OPERATION LOG ROWS
    //
    let state_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM app_state", [], |row| row.get(0))?;
    let log_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;

    println!("{}• App state entries:{} {}", CYAN, RESET, state_rows);
    println!("{}• Operation log rows:{} {}", CYAN, RESET, log_rows);

    println!();
    Ok(())
}
