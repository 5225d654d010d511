//! Temporal error types
//!
//! These cover malformed input only. Expected business outcomes such as an
//! overlap between two connections are never errors; they are reported as
//! validation results by the gatekeeper.

use thiserror::Error;

use crate::record::Boundary;

/// Errors raised while building or comparing temporal values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemporalError {
    /// The year required to build a point is absent
    #[error("Missing {0} year")]
    MissingYear(Boundary),

    /// A precision token is not one of year/month/day
    #[error("Invalid precision: {0}")]
    InvalidPrecision(String),

    /// The end boundary precedes the start boundary
    #[error("Invalid range: end {end} precedes start {start}")]
    InvalidRange {
        /// Rendered start boundary
        start: String,
        /// Rendered end boundary
        end: String,
    },

    /// The parts do not name a real calendar date
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
