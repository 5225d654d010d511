//! Connection constraint validation
//!
//! Each check performs exactly one lookup read and holds no locks. The caller
//! must run the lookup, this check and its own write inside one transaction
//! (or back the rule with a database exclusion constraint); otherwise two
//! concurrent writers can both pass a non-overlapping check.

use crate::temporal::{find, TemporalService};
use crate::{ConstraintConfig, GatekeeperError};
use spanline_domain::traits::{ConnectionLookup, ConnectionQuery};
use spanline_domain::{ConnectionConstraint, ConnectionId, ConnectionSnapshot};
use std::fmt::Display;
use tracing::{debug, info};

/// Message reported when a non-overlapping connection collides with another
pub const OVERLAP_MESSAGE: &str = "Connection dates overlap with an existing connection";

/// Message reported when a single connection already exists
pub const ALREADY_EXISTS_MESSAGE: &str = "A connection of this type already exists between these spans";

/// Verdict on a candidate connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the candidate may be written
    pub valid: bool,

    /// User-facing reason when invalid
    pub error: Option<String>,

    /// The existing connection the candidate conflicts with
    pub conflicting: Option<ConnectionId>,
}

impl ValidationResult {
    /// An accepting verdict
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: None,
            conflicting: None,
        }
    }

    /// A rejecting verdict
    pub fn invalid(error: impl Into<String>, conflicting: Option<ConnectionId>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
            conflicting,
        }
    }

    /// Whether the candidate may be written
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Applies relation-type constraints to candidate connections
pub struct ConnectionConstraintService {
    config: ConstraintConfig,
    temporal: TemporalService,
}

impl ConnectionConstraintService {
    /// Create a service with the given constraint configuration
    pub fn new(config: ConstraintConfig) -> Self {
        Self {
            config,
            temporal: TemporalService::new(),
        }
    }

    /// Create a service with the default constraint configuration
    pub fn default_config() -> Self {
        Self::new(ConstraintConfig::default())
    }

    /// The configuration in use
    pub fn config(&self) -> &ConstraintConfig {
        &self.config
    }

    /// Validate a candidate against the constraint configured for its
    /// relation type
    ///
    /// Relation types without a configured constraint are accepted without a
    /// lookup.
    pub fn validate_connection<L>(
        &self,
        lookup: &L,
        candidate: &ConnectionSnapshot,
    ) -> Result<ValidationResult, GatekeeperError>
    where
        L: ConnectionLookup,
        L::Error: Display,
    {
        let relation_type = candidate.connection.relation_type.as_str();
        match self.config.constraint_for(relation_type) {
            Some(constraint_type) => self.validate_constraint(lookup, candidate, constraint_type),
            None => {
                debug!(relation_type, "No constraint configured");
                Ok(ValidationResult::valid())
            }
        }
    }

    /// Validate a candidate against a named constraint
    ///
    /// # Arguments
    ///
    /// * `lookup` - Read access to existing connections, bound to the caller's
    ///   write transaction
    /// * `candidate` - The connection about to be written, with its dates
    /// * `constraint_type` - Constraint token, `single` or `non_overlapping`
    ///
    /// # Errors
    ///
    /// [`GatekeeperError::UnknownConstraintType`] for an unrecognized token,
    /// [`GatekeeperError::Lookup`] if the read fails and
    /// [`GatekeeperError::Temporal`] if the candidate's dates are malformed.
    /// A broken constraint is an `Ok` result with `valid == false`.
    pub fn validate_constraint<L>(
        &self,
        lookup: &L,
        candidate: &ConnectionSnapshot,
        constraint_type: &str,
    ) -> Result<ValidationResult, GatekeeperError>
    where
        L: ConnectionLookup,
        L::Error: Display,
    {
        let constraint = ConnectionConstraint::parse(constraint_type)
            .ok_or_else(|| GatekeeperError::UnknownConstraintType(constraint_type.to_string()))?;

        let competing = find(lookup, &competing_query(candidate))?;
        debug!(
            connection = %candidate.connection.id,
            relation_type = %candidate.connection.relation_type,
            %constraint,
            competing = competing.len(),
            "Checking connection constraint"
        );

        let result = match constraint {
            ConnectionConstraint::NonOverlapping => self.check_non_overlapping(candidate, &competing)?,
            ConnectionConstraint::Single => check_single(&competing),
        };

        if !result.valid {
            info!(
                connection = %candidate.connection.id,
                %constraint,
                conflicting = ?result.conflicting.map(|id| id.to_string()),
                "Connection rejected"
            );
        }

        Ok(result)
    }

    /// Reject the candidate if its dates overlap any competing connection
    fn check_non_overlapping(
        &self,
        candidate: &ConnectionSnapshot,
        competing: &[ConnectionSnapshot],
    ) -> Result<ValidationResult, GatekeeperError> {
        let Some(dates) = candidate.dates.as_ref().filter(|d| d.start_year.is_some()) else {
            debug!(connection = %candidate.connection.id, "Undated candidate cannot overlap");
            return Ok(ValidationResult::valid());
        };
        let candidate_range = self.temporal.range_for(dates)?;

        for existing in competing {
            let Some(existing_range) = self.temporal.existing_range(existing) else {
                continue;
            };

            if self.temporal.overlaps(&candidate_range, &existing_range) {
                return Ok(ValidationResult::invalid(OVERLAP_MESSAGE, Some(existing.connection.id)));
            }
        }

        Ok(ValidationResult::valid())
    }
}

/// Reject the candidate if any other connection of its type exists
fn check_single(competing: &[ConnectionSnapshot]) -> ValidationResult {
    match competing.first() {
        Some(existing) => ValidationResult::invalid(ALREADY_EXISTS_MESSAGE, Some(existing.connection.id)),
        None => ValidationResult::valid(),
    }
}

/// Same pair and type, minus the candidate itself
fn competing_query(candidate: &ConnectionSnapshot) -> ConnectionQuery {
    let connection = &candidate.connection;

    let mut query = ConnectionQuery::between(connection.parent, connection.child, connection.relation_type.clone());
    query.exclude_connection = Some(connection.id);
    // An unlinked candidate still owns the record it carries
    query.exclude_date_record = connection
        .date_record
        .or_else(|| candidate.dates.as_ref().map(|dates| dates.id));
    query
}
