use crate::core::filter::SortField;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for trapwatch
/// CLI application to log pest-trap counts with SQLite
#[derive(Parser)]
#[command(
    name = "trapwatch",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple pest-trap logging CLI: record counts by location and visualize trends",
    long_about = None
)]
pub struct Cli {
    /// Override store database path (useful for tests or custom locations)
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
    /// Initialize the store database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Record pests found in a trap location
    Add {
        /// Trap location name (must already exist unless --new-location)
        location: String,

        /// Number of pests found (must be greater than zero)
        count: u32,

        /// Observation date (YYYY-MM-DD, defaults to today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Create the location first if it does not exist yet
        #[arg(long = "new-location")]
        new_location: bool,
    },

    /// Delete an entry by id
    Del {
        /// Entry id as shown by `list`
        id: u64,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// List entries as a table
    List {
        #[arg(long, help = "Filter by trap location name")]
        location: Option<String>,

        #[arg(long, help = "Start date, inclusive (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long, help = "End date, inclusive (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long, value_enum, default_value = "date", help = "Sort column")]
        sort: SortField,

        #[arg(long, help = "Sort ascending instead of descending")]
        asc: bool,
    },

    /// Show or edit trap locations
    Locations {
        #[arg(long, value_name = "NAME", help = "Add a trap location")]
        add: Option<String>,

        #[arg(
            long,
            value_name = "NAME",
            help = "Remove all trap locations with this name"
        )]
        remove: Option<String>,
    },

    /// Show summary statistics and charts
    Stats {
        #[arg(long, help = "Start date, inclusive (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long, help = "End date, inclusive (YYYY-MM-DD)")]
        to: Option<String>,
    },

    /// Export entry data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Start date, inclusive (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long, help = "End date, inclusive (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the store database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
