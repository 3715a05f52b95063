//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "timesheet-formatter")]
#[command(about = "Reformat punch-clock timesheets into daily hours for state reporting", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log level when RUST_LOG is not set (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    pub log_level: LevelFilter,

    /// TOML settings file (output file suffixes)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the hours report from a timesheet and an employee roster (default)
    Format {
        /// Timesheet export (asked for on stdin if omitted)
        #[arg(short, long, value_name = "FILE")]
        timesheet: Option<PathBuf>,

        /// Employee roster (asked for on stdin if omitted)
        #[arg(short, long, value_name = "FILE")]
        employees: Option<PathBuf>,

        /// Report path (default: <timesheet>_output.csv)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Check input files without writing anything
    Validate {
        /// Timesheet export to check
        #[arg(short, long, value_name = "FILE", required_unless_present = "employees")]
        timesheet: Option<PathBuf>,

        /// Employee roster to check
        #[arg(short, long, value_name = "FILE")]
        employees: Option<PathBuf>,
    },

    /// Split overnight shifts and write the timesheet back out
    Split {
        /// Timesheet export
        timesheet: PathBuf,

        /// Output path (default: <timesheet>_separated.csv)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Format {
            timesheet: None,
            employees: None,
            output: None,
        }
    }
}
