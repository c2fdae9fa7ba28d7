use crate::config::Config;
use crate::errors::AppResult;

use crate::cli::parser::Commands;
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!(
                "{}",
                serde_yaml::to_string(&cfg).unwrap_or_else(|_| "<unreadable>".to_string())
            );
        }

        // ---- CHECK CONFIG ----
        if *check {
            match Config::missing_fields() {
                Ok(missing) if missing.is_empty() => {
                    success("Configuration file is complete.");
                }
                Ok(missing) => {
                    warning(format!(
                        "Configuration file is missing fields: {}",
                        missing.join(", ")
                    ));
                    println!("Defaults are used for the missing fields.");
                }
                Err(e) => {
                    warning(format!("Could not read configuration file: {}", e));
                }
            }
        }
    }

    Ok(())
}
