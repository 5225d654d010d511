//! Rules for legal precision combinations between two boundaries
//!
//! Precision tokens arrive from stored records as strings. An unrecognized
//! token means the upstream data is corrupt, so the strict rules reject it,
//! while the record-level check treats it as maximally specific.

use crate::{Precision, TemporalError};

/// Validates precision transitions and combinations
pub struct PrecisionValidator;

impl PrecisionValidator {
    /// Check that a boundary may move from precision `from` to `to`
    ///
    /// The first precision ever set (`from` is `None`) is always accepted.
    /// An end boundary may not become more precise than the precision
    /// already established.
    ///
    /// # Errors
    /// Returns [`TemporalError::InvalidPrecision`] for an unrecognized token.
    pub fn validate_transition(
        from: Option<&str>,
        to: &str,
        is_end_boundary: bool,
    ) -> Result<bool, TemporalError> {
        let Some(from) = from else {
            return Ok(true);
        };

        let from = parse_strict(from)?;
        let to = parse_strict(to)?;

        Ok(!(is_end_boundary && to.is_finer_than(from)))
    }

    /// Check that a record's end precision is no finer than its start precision
    ///
    /// A record without an end precision is always valid.
    pub fn validate_record_precisions(start: &str, end: Option<&str>) -> bool {
        let Some(end) = end else {
            return true;
        };

        parse_lenient(end).ordinal() <= parse_lenient(start).ordinal()
    }

    /// The coarser of two precisions
    ///
    /// # Errors
    /// Returns [`TemporalError::InvalidPrecision`] for an unrecognized token.
    pub fn common_precision(p1: &str, p2: &str) -> Result<Precision, TemporalError> {
        Ok(parse_strict(p1)?.coarser(parse_strict(p2)?))
    }
}

fn parse_strict(token: &str) -> Result<Precision, TemporalError> {
    token.parse()
}

fn parse_lenient(token: &str) -> Precision {
    Precision::parse(token).unwrap_or(Precision::Day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_transition_always_valid() {
        assert_eq!(PrecisionValidator::validate_transition(None, "day", true), Ok(true));
        assert_eq!(PrecisionValidator::validate_transition(None, "year", false), Ok(true));
    }

    #[test]
    fn test_end_boundary_cannot_gain_precision() {
        assert_eq!(PrecisionValidator::validate_transition(Some("year"), "month", true), Ok(false));
        assert_eq!(PrecisionValidator::validate_transition(Some("month"), "day", true), Ok(false));
        assert_eq!(PrecisionValidator::validate_transition(Some("day"), "year", true), Ok(true));
        assert_eq!(PrecisionValidator::validate_transition(Some("month"), "month", true), Ok(true));
    }

    #[test]
    fn test_start_boundary_may_gain_precision() {
        assert_eq!(PrecisionValidator::validate_transition(Some("year"), "day", false), Ok(true));
    }

    #[test]
    fn test_transition_rejects_unknown_tokens() {
        assert_eq!(
            PrecisionValidator::validate_transition(Some("fortnight"), "day", false),
            Err(TemporalError::InvalidPrecision("fortnight".to_string()))
        );
        assert!(PrecisionValidator::validate_transition(Some("day"), "hour", true).is_err());
    }

    #[test]
    fn test_record_precisions() {
        assert!(PrecisionValidator::validate_record_precisions("day", None));
        assert!(PrecisionValidator::validate_record_precisions("day", Some("year")));
        assert!(PrecisionValidator::validate_record_precisions("month", Some("month")));
        assert!(!PrecisionValidator::validate_record_precisions("year", Some("day")));
    }

    #[test]
    fn test_record_precisions_treat_unknown_as_day() {
        // Unknown end counts as day, which is finer than month
        assert!(!PrecisionValidator::validate_record_precisions("month", Some("bogus")));
        // Unknown start counts as day, so any end is allowed
        assert!(PrecisionValidator::validate_record_precisions("bogus", Some("day")));
    }

    #[test]
    fn test_common_precision() {
        assert_eq!(PrecisionValidator::common_precision("day", "month"), Ok(Precision::Month));
        assert_eq!(PrecisionValidator::common_precision("year", "day"), Ok(Precision::Year));
        assert_eq!(PrecisionValidator::common_precision("day", "day"), Ok(Precision::Day));
        assert!(PrecisionValidator::common_precision("day", "era").is_err());
    }
}
