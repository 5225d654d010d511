//! Constraint configuration
//!
//! Maps relation type names to the constraint their connections obey. In the
//! surrounding application this is relation-type metadata; here it is a TOML
//! table:
//!
//! ```toml
//! [constraints]
//! residence = "non_overlapping"
//! marriage = "single"
//! ```

use crate::GatekeeperError;
use serde::{Deserialize, Serialize};
use spanline_domain::ConnectionConstraint;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Constraint per relation type
///
/// Tokens are kept as written so that a misconfigured relation type surfaces
/// as [`GatekeeperError::UnknownConstraintType`] when it is used.
///
/// # Examples
///
/// ```
/// use spanline_gatekeeper::ConstraintConfig;
///
/// let config = ConstraintConfig::default();
/// assert_eq!(config.constraint_for("residence"), Some("non_overlapping"));
/// assert_eq!(config.constraint_for("friendship"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintConfig {
    /// Relation type name → constraint token
    #[serde(default)]
    pub constraints: BTreeMap<String, String>,
}

impl Default for ConstraintConfig {
    /// Relation types of a typical timeline
    ///
    /// Residence, employment, education and membership are non_overlapping.
    /// No relation type is `single` by default.
    fn default() -> Self {
        Self::empty()
            .with_constraint("residence", ConnectionConstraint::NonOverlapping)
            .with_constraint("employment", ConnectionConstraint::NonOverlapping)
            .with_constraint("education", ConnectionConstraint::NonOverlapping)
            .with_constraint("membership", ConnectionConstraint::NonOverlapping)
    }
}

impl ConstraintConfig {
    /// A configuration with no constrained relation types
    pub fn empty() -> Self {
        Self {
            constraints: BTreeMap::new(),
        }
    }

    /// Add or replace the constraint of a relation type
    pub fn with_constraint(mut self, relation_type: impl Into<String>, constraint: ConnectionConstraint) -> Self {
        self.constraints
            .insert(relation_type.into(), constraint.as_str().to_string());
        self
    }

    /// Constraint token configured for a relation type
    pub fn constraint_for(&self, relation_type: &str) -> Option<&str> {
        self.constraints.get(relation_type).map(String::as_str)
    }

    /// Parse and check a configuration from TOML
    pub fn from_toml_str(contents: &str) -> Result<Self, GatekeeperError> {
        let config: ConstraintConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and check a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GatekeeperError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Check that every configured token names a known constraint
    pub fn validate(&self) -> Result<(), GatekeeperError> {
        for (relation_type, token) in &self.constraints {
            if ConnectionConstraint::parse(token).is_none() {
                return Err(GatekeeperError::Config(format!(
                    "relation type '{}' has unknown constraint '{}'",
                    relation_type, token
                )));
            }
        }
        Ok(())
    }
}
