use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::store;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::record::{LogRecord, RecordKind};
use crate::utils::date::fmt_timestamp;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { category } = cmd {
        let cat = Category::from_code(category)
            .ok_or_else(|| AppError::InvalidCategory(category.clone()))?;

        let mut pool = DbPool::new(&cfg.database)?;
        let records = store::load(&mut pool, cat)?;

        if records.is_empty() {
            println!("No {} recorded in the last 3 days.", cat.label().to_lowercase());
            return Ok(());
        }

        println!("📍 {} (last 3 days):\n", cat.label());
        match cat {
            Category::Visits => print_visits(&records, cfg.show_coords),
            Category::Emergencies => print_emergencies(&records, cfg.show_coords),
        }
    }
    Ok(())
}

fn fmt_coord(value: Option<f64>) -> String {
    value.map(|v| format!("{:.4}", v)).unwrap_or_else(|| "-".to_string())
}

fn print_visits(records: &[LogRecord], show_coords: bool) {
    let mut table = if show_coords {
        Table::new(&["When", "City", "Lat", "Lng"])
    } else {
        Table::new(&["When", "City"])
    };

    for record in records {
        let (lat, lng) = record.coords();
        let mut row = vec![fmt_timestamp(record.timestamp), record.city.clone()];
        if show_coords {
            row.push(fmt_coord(lat));
            row.push(fmt_coord(lng));
        }
        table.add_row(row);
    }

    print!("{}", table.render());
}

fn print_emergencies(records: &[LogRecord], show_coords: bool) {
    let mut table = if show_coords {
        Table::new(&["When", "City", "Event", "Severity", "Lat", "Lng", "Details"])
    } else {
        Table::new(&["When", "City", "Event", "Severity", "Details"])
    };

    for record in records {
        if let RecordKind::Emergency {
            event,
            severity,
            details,
            lat,
            lng,
            ..
        } = &record.kind
        {
            let mut row = vec![
                fmt_timestamp(record.timestamp),
                record.city.clone(),
                event.clone(),
                severity.sv_as_str().to_string(),
            ];
            if show_coords {
                row.push(fmt_coord(*lat));
                row.push(fmt_coord(*lng));
            }
            row.push(details.clone());
            table.add_row(row);
        }
    }

    print!("{}", table.render());
}
