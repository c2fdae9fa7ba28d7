use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for stormlog
/// CLI application to track weather-response activity with SQLite
#[derive(Parser)]
#[command(
    name = "stormlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Pin locations, report emergencies, and review local weather-response activity",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Open a session as the given user
    Login {
        /// User name
        user: String,

        #[arg(long, help = "Optional e-mail address stored with the profile")]
        email: Option<String>,
    },

    /// Close the session and clear pinned data and activity logs
    Logout,

    /// Pin a place: records a visit and shows its forecast as pinned
    Pin {
        /// Short place label (e.g. city name); optional with --address
        city: Option<String>,

        #[arg(long, help = "Latitude of the pinned point", allow_hyphen_values = true)]
        lat: Option<f64>,

        #[arg(long, help = "Longitude of the pinned point", allow_hyphen_values = true)]
        lng: Option<f64>,

        #[arg(long, help = "Full place description")]
        label: Option<String>,

        #[arg(
            long,
            help = "Raw reverse-geocoder address payload (JSON object with city/town/village/county/state/country)"
        )]
        address: Option<String>,
    },

    /// Clear the pinned place and return to the default view
    Unpin,

    /// Report an emergency (requires an active session)
    Report {
        /// Event label (e.g. "Flood Warning")
        event: String,

        #[arg(long, help = "Severity: low, moderate or high")]
        severity: Option<String>,

        #[arg(long, help = "Short place label")]
        city: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,

        #[arg(long, allow_hyphen_values = true)]
        lng: Option<f64>,

        #[arg(long, help = "Free-form details shown with the report")]
        details: Option<String>,

        #[arg(
            long,
            help = "Raw reverse-geocoder address payload used to resolve the place label"
        )]
        address: Option<String>,
    },

    /// List recorded activity
    List {
        #[arg(
            long,
            default_value = "visits",
            help = "Category to list: visits or emergencies"
        )]
        category: String,
    },

    /// Show aggregate activity views
    Stats {
        #[arg(
            long = "by",
            default_value = "city",
            help = "Grouping: city (top 10, descending) or month (ascending)"
        )]
        by: String,

        #[arg(
            long,
            default_value = "visits",
            help = "Category to aggregate: visits or emergencies"
        )]
        category: String,
    },

    /// Drop recorded activity for a category
    Clear {
        #[arg(
            long,
            default_value = "all",
            help = "Category to clear: visits, emergencies or all"
        )]
        category: String,
    },

    /// Export recorded activity
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            default_value = "visits",
            help = "Category to export: visits or emergencies"
        )]
        category: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
