//! Spanline CLI library.
//!
//! This library provides the core functionality for the Spanline command-line
//! interface: reading record and connection fixtures, running them through the
//! gatekeeper, and formatting the verdicts.

pub mod cli;
pub mod commands;
pub mod error;
pub mod fixture;
pub mod output;

pub use cli::{Cli, Command};
pub use error::{CliError, Result};
pub use output::Formatter;
