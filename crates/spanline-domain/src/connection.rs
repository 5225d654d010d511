//! Connection module - directed links between two spans

use crate::{ConnectionId, DateRecord, SpanId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Policy attached to a relation type
///
/// Governs which connections of one type may coexist between the same parent
/// and child span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionConstraint {
    /// At most one connection of this type between a pair
    Single,

    /// Any number of connections, as long as their dates never overlap
    NonOverlapping,
}

impl ConnectionConstraint {
    /// Get the constraint token as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionConstraint::Single => "single",
            ConnectionConstraint::NonOverlapping => "non_overlapping",
        }
    }

    /// Parse a constraint token, returning `None` for unrecognized tokens
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "single" => Some(ConnectionConstraint::Single),
            "non_overlapping" => Some(ConnectionConstraint::NonOverlapping),
            _ => None,
        }
    }
}

impl fmt::Display for ConnectionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed connection from a parent span to a child span
///
/// The connection's own temporal extent lives in a separate date record,
/// referenced by `date_record`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Connection identity
    #[serde(default)]
    pub id: ConnectionId,

    /// Parent (subject) span
    pub parent: SpanId,

    /// Child (object) span
    pub child: SpanId,

    /// Relation type name, e.g. "residence"
    pub relation_type: String,

    /// Date record describing when the connection held
    #[serde(default)]
    pub date_record: Option<SpanId>,
}

impl Connection {
    /// Create a new connection with a fresh identity
    pub fn new(parent: SpanId, child: SpanId, relation_type: impl Into<String>) -> Self {
        Self {
            id: ConnectionId::new(),
            parent,
            child,
            relation_type: relation_type.into(),
            date_record: None,
        }
    }

    /// Attach the date record describing this connection
    pub fn with_date_record(mut self, date_record: SpanId) -> Self {
        self.date_record = Some(date_record);
        self
    }
}

/// A connection together with the dates of its date record
///
/// This is the unit the lookup capability returns and the constraint checks
/// consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSnapshot {
    /// The connection
    pub connection: Connection,

    /// Its date record, if it has one
    #[serde(default)]
    pub dates: Option<DateRecord>,
}

impl ConnectionSnapshot {
    /// Pair a connection with its dates, linking the connection to the record
    pub fn dated(connection: Connection, dates: DateRecord) -> Self {
        let connection = connection.with_date_record(dates.id);
        Self {
            connection,
            dates: Some(dates),
        }
    }

    /// A connection with no date record
    pub fn undated(connection: Connection) -> Self {
        Self {
            connection,
            dates: None,
        }
    }
}
