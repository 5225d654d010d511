//! Spanline Gatekeeper
//!
//! Answers temporal questions about date-bearing records and validates
//! connections against their relation type's constraint before they are
//! written.
//!
//! The Gatekeeper provides:
//! - Date sanity checks for records about to be written
//! - Overlap, adjacency and precision queries over records
//! - Single and non-overlapping constraint checks for connections
//!
//! # Examples
//!
//! ```no_run
//! use spanline_gatekeeper::{ConnectionConstraintService, ConstraintConfig};
//!
//! let config = ConstraintConfig::default();
//! let service = ConnectionConstraintService::new(config);
//!
//! // Inside the caller's write transaction:
//! // let result = service.validate_connection(&lookup, &candidate)?;
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod temporal;
mod validator;

pub use config::ConstraintConfig;
pub use error::GatekeeperError;
pub use temporal::TemporalService;
pub use validator::{ConnectionConstraintService, ValidationResult, ALREADY_EXISTS_MESSAGE, OVERLAP_MESSAGE};
