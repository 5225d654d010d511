//! Fixture files and the in-memory connection lookup they back.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use spanline_domain::traits::{ConnectionLookup, ConnectionQuery};
use spanline_domain::{ConnectionSnapshot, DateRecord};
use std::convert::Infallible;
use std::fs;
use std::path::Path;

/// A candidate connection and the connections already stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionFixture {
    /// Connection about to be written
    pub candidate: ConnectionSnapshot,

    /// Connections already stored
    #[serde(default)]
    pub existing: Vec<ConnectionSnapshot>,
}

impl ConnectionFixture {
    /// Read a fixture from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Lookup over the stored connections.
    pub fn lookup(&self) -> InMemoryConnections {
        InMemoryConnections::new(self.existing.clone())
    }
}

/// Read a JSON array of date records.
pub fn load_date_records(path: &Path) -> Result<Vec<DateRecord>> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Connection lookup over a fixed list of snapshots.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConnections {
    snapshots: Vec<ConnectionSnapshot>,
}

impl InMemoryConnections {
    /// Create a lookup over the given snapshots.
    pub fn new(snapshots: Vec<ConnectionSnapshot>) -> Self {
        Self { snapshots }
    }
}

impl ConnectionLookup for InMemoryConnections {
    type Error = Infallible;

    fn find_connections(&self, query: &ConnectionQuery) -> std::result::Result<Vec<ConnectionSnapshot>, Self::Error> {
        Ok(self
            .snapshots
            .iter()
            .filter(|snapshot| query.matches(snapshot))
            .cloned()
            .collect())
    }
}
