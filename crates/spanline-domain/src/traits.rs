//! Trait definitions for external interactions
//!
//! These traits define the boundary between the temporal engine and the
//! surrounding application. Implementations live with the persistence layer.

use crate::{ConnectionId, ConnectionSnapshot, SpanId};

/// Read capability over existing connections
///
/// Implementations must answer from the same transaction the caller will
/// write in. The engine reads once per check and holds no locks, so a lookup
/// outside the write transaction lets two concurrent writers both pass a
/// non-overlapping check.
pub trait ConnectionLookup {
    /// Error type for lookup operations
    type Error;

    /// All connections matching the query, with their dates
    fn find_connections(&self, query: &ConnectionQuery) -> Result<Vec<ConnectionSnapshot>, Self::Error>;
}

/// Criteria for finding competing connections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionQuery {
    /// Parent span
    pub parent: SpanId,

    /// Child span
    pub child: SpanId,

    /// Relation type name
    pub relation_type: String,

    /// Connection to leave out (the candidate itself)
    pub exclude_connection: Option<ConnectionId>,

    /// Date record to leave out (the candidate's own dates)
    pub exclude_date_record: Option<SpanId>,
}

impl ConnectionQuery {
    /// Query every connection of a type between a pair
    pub fn between(parent: SpanId, child: SpanId, relation_type: impl Into<String>) -> Self {
        Self {
            parent,
            child,
            relation_type: relation_type.into(),
            exclude_connection: None,
            exclude_date_record: None,
        }
    }

    /// Whether a snapshot satisfies this query
    ///
    /// Lets in-memory lookups filter exactly as a database query would.
    pub fn matches(&self, snapshot: &ConnectionSnapshot) -> bool {
        let connection = &snapshot.connection;

        connection.parent == self.parent
            && connection.child == self.child
            && connection.relation_type == self.relation_type
            && Some(connection.id) != self.exclude_connection
            && (self.exclude_date_record.is_none() || connection.date_record != self.exclude_date_record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Connection, DateRecord};

    #[test]
    fn test_query_matches_pair_and_type() {
        let parent = SpanId::new();
        let child = SpanId::new();
        let snapshot = ConnectionSnapshot::undated(Connection::new(parent, child, "residence"));

        assert!(ConnectionQuery::between(parent, child, "residence").matches(&snapshot));
        assert!(!ConnectionQuery::between(child, parent, "residence").matches(&snapshot));
        assert!(!ConnectionQuery::between(parent, child, "employment").matches(&snapshot));
    }

    #[test]
    fn test_query_exclusions() {
        let parent = SpanId::new();
        let child = SpanId::new();
        let dates = DateRecord::new().starting(2000, None, None);
        let snapshot = ConnectionSnapshot::dated(Connection::new(parent, child, "residence"), dates.clone());

        let mut query = ConnectionQuery::between(parent, child, "residence");
        query.exclude_date_record = Some(dates.id);
        assert!(!query.matches(&snapshot));

        let mut query = ConnectionQuery::between(parent, child, "residence");
        query.exclude_connection = Some(snapshot.connection.id);
        assert!(!query.matches(&snapshot));
    }

    #[test]
    fn test_undated_snapshot_survives_date_exclusion() {
        let parent = SpanId::new();
        let child = SpanId::new();
        let snapshot = ConnectionSnapshot::undated(Connection::new(parent, child, "residence"));

        let mut query = ConnectionQuery::between(parent, child, "residence");
        query.exclude_date_record = Some(SpanId::new());
        assert!(query.matches(&snapshot));
    }
}
