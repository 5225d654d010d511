//! Gatekeeper error types

use spanline_domain::TemporalError;
use thiserror::Error;

/// Errors that can occur during gatekeeper operations
///
/// A connection that breaks its constraint is not an error; it is reported
/// through [`crate::ValidationResult`].
#[derive(Error, Debug)]
pub enum GatekeeperError {
    /// Malformed dates on the candidate
    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),

    /// Connection lookup failed
    #[error("Lookup error: {0}")]
    Lookup(String),

    /// Relation type metadata names a constraint that does not exist
    #[error("Unknown constraint type: {0}")]
    UnknownConstraintType(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error while reading configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
