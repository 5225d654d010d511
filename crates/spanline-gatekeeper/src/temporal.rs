//! Temporal service - the facade other subsystems use for date questions

use crate::GatekeeperError;
use chrono::NaiveDate;
use spanline_domain::traits::{ConnectionLookup, ConnectionQuery};
use spanline_domain::{
    ConnectionSnapshot, HasTemporalFields, Precision, PrecisionValidator, SpanId, TemporalError,
    TemporalPoint, TemporalRange,
};
use std::fmt::Display;
use tracing::{debug, warn};

/// Builds ranges from records and answers overlap, adjacency and ordering
/// questions about them
#[derive(Debug, Clone, Copy, Default)]
pub struct TemporalService;

impl TemporalService {
    /// Create a new temporal service
    pub fn new() -> Self {
        Self
    }

    /// Build the range described by a record
    pub fn range_for<R>(&self, record: &R) -> Result<TemporalRange, TemporalError>
    where
        R: HasTemporalFields + ?Sized,
    {
        TemporalRange::from_record(record)
    }

    /// Whether two ranges overlap
    pub fn overlaps(&self, a: &TemporalRange, b: &TemporalRange) -> bool {
        a.overlaps(b)
    }

    /// Whether a candidate's dates would overlap an existing connection
    ///
    /// Reads existing connections of `relation_type` between `parent` and
    /// `child` once and stops at the first overlap.
    ///
    /// # Errors
    /// Fails if the lookup fails or the candidate's dates are malformed.
    pub fn would_overlap<L, R>(
        &self,
        lookup: &L,
        parent: SpanId,
        child: SpanId,
        relation_type: &str,
        candidate: &R,
    ) -> Result<bool, GatekeeperError>
    where
        L: ConnectionLookup,
        L::Error: Display,
        R: HasTemporalFields + ?Sized,
    {
        let query = ConnectionQuery::between(parent, child, relation_type);
        let existing = find(lookup, &query)?;
        if existing.is_empty() {
            return Ok(false);
        }

        let candidate = self.range_for(candidate)?;
        Ok(existing
            .iter()
            .filter_map(|snapshot| self.existing_range(snapshot))
            .any(|range| candidate.overlaps(&range)))
    }

    /// Whether one record ends the day before the other starts
    ///
    /// Records without a start year are never adjacent to anything.
    pub fn are_adjacent<A, B>(&self, a: &A, b: &B) -> Result<bool, TemporalError>
    where
        A: HasTemporalFields + ?Sized,
        B: HasTemporalFields + ?Sized,
    {
        if a.start_year().is_none() || b.start_year().is_none() {
            return Ok(false);
        }

        Ok(self.range_for(a)?.is_adjacent(&self.range_for(b)?))
    }

    /// Whether a record's dates are in a sane order
    ///
    /// This is the check to run before writing any date-bearing record. It
    /// never fails: every malformed record is reported as `false`.
    pub fn validate_dates<R>(&self, record: &R) -> bool
    where
        R: HasTemporalFields + ?Sized,
    {
        match self.range_for(record) {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "Rejected record dates");
                false
            }
        }
    }

    /// Whether a record's dates are sane and its end is no more precise
    /// than its start
    ///
    /// Stored precision tokens are used when present, otherwise the
    /// precision implied by the parts.
    pub fn validate_precisions<R>(&self, record: &R) -> bool
    where
        R: HasTemporalFields + ?Sized,
    {
        let range = match self.range_for(record) {
            Ok(range) => range,
            Err(e) => {
                debug!(error = %e, "Rejected record dates");
                return false;
            }
        };

        let start = record
            .start_precision()
            .unwrap_or_else(|| range.start().precision().as_str());
        let end = range
            .end()
            .map(|end| record.end_precision().unwrap_or_else(|| end.precision().as_str()));

        let valid = PrecisionValidator::validate_record_precisions(start, end);
        if !valid {
            debug!(start, end, "Rejected record precisions");
        }
        valid
    }

    /// Earliest instant of the record's start
    pub fn normalized_start<R>(&self, record: &R) -> Result<NaiveDate, TemporalError>
    where
        R: HasTemporalFields + ?Sized,
    {
        Ok(TemporalPoint::from_record(record, false)?.to_date())
    }

    /// Latest instant of the record's end, `None` when it has no end year
    pub fn normalized_end<R>(&self, record: &R) -> Result<Option<NaiveDate>, TemporalError>
    where
        R: HasTemporalFields + ?Sized,
    {
        if record.end_year().is_none() {
            return Ok(None);
        }
        Ok(Some(TemporalPoint::from_record(record, true)?.to_end_date()))
    }

    /// The coarser of the two records' start precisions
    pub fn common_precision<A, B>(&self, a: &A, b: &B) -> Result<Precision, TemporalError>
    where
        A: HasTemporalFields + ?Sized,
        B: HasTemporalFields + ?Sized,
    {
        let a = TemporalPoint::from_record(a, false)?;
        let b = TemporalPoint::from_record(b, false)?;
        PrecisionValidator::common_precision(a.precision().as_str(), b.precision().as_str())
    }

    /// Range of an existing connection, if it has usable dates
    ///
    /// Undated connections cannot conflict with anything. Stored connections
    /// whose dates no longer build a range are skipped so that one corrupt
    /// row does not block every later write.
    pub(crate) fn existing_range(&self, snapshot: &ConnectionSnapshot) -> Option<TemporalRange> {
        let dates = snapshot.dates.as_ref()?;
        dates.start_year?;

        match self.range_for(dates) {
            Ok(range) => Some(range),
            Err(e) => {
                warn!(
                    connection = %snapshot.connection.id,
                    error = %e,
                    "Skipping existing connection with malformed dates"
                );
                None
            }
        }
    }
}

pub(crate) fn find<L>(lookup: &L, query: &ConnectionQuery) -> Result<Vec<ConnectionSnapshot>, GatekeeperError>
where
    L: ConnectionLookup,
    L::Error: Display,
{
    lookup
        .find_connections(query)
        .map_err(|e| GatekeeperError::Lookup(format!("Failed to find connections: {}", e)))
}
