//! Spanline CLI - Command-line front end for the temporal gatekeeper.

use anyhow::Context;
use clap::Parser;
use spanline_cli::commands;
use spanline_cli::{Cli, Command, Formatter};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Initialize tracing (log to stderr, RUST_LOG overrides)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();
    let formatter = Formatter::new(cli.format, !cli.no_color);

    let passed = match cli.command {
        Command::Dates(args) => {
            let file = args.file.display().to_string();
            commands::execute_dates(args, &formatter)
                .with_context(|| format!("Failed to check dates in {}", file))?
        }
        Command::Connection(args) => {
            let fixture = args.fixture.display().to_string();
            commands::execute_connection(args, &formatter)
                .with_context(|| format!("Failed to check connection in {}", fixture))?
        }
    };

    Ok(passed)
}
