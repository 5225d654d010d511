//! Spanline Domain Layer
//!
//! This crate contains the temporal value objects of Spanline and the
//! capability traits the surrounding application implements. It has no I/O
//! and no persistence types; everything here is built fresh from caller
//! snapshots and compared by value.
//!
//! ## Key Concepts
//!
//! - **Precision**: the granularity a date is known at (year, month, day)
//! - **Temporal Point**: one calendar boundary, with earliest and latest instants
//! - **Temporal Range**: a start and an optional end (absent means ongoing)
//! - **Connection**: a directed, typed link between two spans with its own dates
//! - **Connection Constraint**: the policy a relation type imposes on its connections
//!
//! ## Architecture
//!
//! - Pure business logic only
//! - Records are read through [`HasTemporalFields`], connections through
//!   [`traits::ConnectionLookup`]
//! - Malformed input is an `Err(TemporalError)`; comparisons never fail

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod connection;
pub mod error;
pub mod ids;
pub mod point;
pub mod precision;
pub mod precision_validator;
pub mod range;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use connection::{Connection, ConnectionConstraint, ConnectionSnapshot};
pub use error::TemporalError;
pub use ids::{ConnectionId, SpanId};
pub use point::TemporalPoint;
pub use precision::Precision;
pub use precision_validator::PrecisionValidator;
pub use range::TemporalRange;
pub use record::{Boundary, DateRecord, HasTemporalFields};
