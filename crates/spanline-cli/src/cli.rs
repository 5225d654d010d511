//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Spanline CLI - Check timeline dates and connection constraints offline.
#[derive(Debug, Parser)]
#[command(name = "spanline")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "table")]
    pub format: CliFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (exit code only, failures listed)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check the dates of span records
    Dates(DatesArgs),

    /// Check a candidate connection against existing connections
    Connection(ConnectionArgs),
}

/// Arguments for the dates command.
#[derive(Debug, clap::Args)]
pub struct DatesArgs {
    /// JSON file holding an array of date records
    pub file: PathBuf,

    /// Also require end precision to be no finer than start precision
    #[arg(long)]
    pub strict_precision: bool,
}

/// Arguments for the connection command.
#[derive(Debug, clap::Args)]
pub struct ConnectionArgs {
    /// JSON fixture with a `candidate` and its `existing` connections
    pub fixture: PathBuf,

    /// Constraint configuration (TOML); built-in defaults when omitted
    #[arg(short, long, env = "SPANLINE_CONSTRAINTS")]
    pub config: Option<PathBuf>,

    /// Constraint to apply instead of the configured one
    #[arg(long)]
    pub constraint: Option<String>,
}
