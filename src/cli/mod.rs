//! CLI argument parsing for flightpath
//!
//! Uses clap for argument parsing.
//! Supports global flags: --data, --config, --format, --quiet, --verbose

pub mod output;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Flightpath - shortest flight routes between airports
#[derive(Parser, Debug)]
#[command(name = "flightpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Flight dataset file (DOT format)
    #[arg(long, short, global = true, env = "FLIGHTPATH_DATA")]
    pub data: Option<PathBuf>,

    /// Config file (default: ~/.config/flightpath/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress the banner and interactive chatter; errors still print
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show airport, flight and mileage totals for the dataset
    Stats,

    /// Find the shortest route between two airports
    Route {
        /// Starting airport code
        start: String,

        /// Destination airport code
        destination: String,
    },

    /// Interactive menu for statistics and route queries
    Shell,
}
