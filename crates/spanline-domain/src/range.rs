//! Temporal range module - a start boundary and an optional end boundary

use crate::record::HasTemporalFields;
use crate::{TemporalError, TemporalPoint};
use std::fmt;

/// A span of time between two partial-precision boundaries
///
/// A range without an end is open-ended (ongoing). When an end is present its
/// latest instant is never earlier than the start's earliest instant, so a
/// start of `1978` and an end of `1994-09` form a valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemporalRange {
    start: TemporalPoint,
    end: Option<TemporalPoint>,
}

impl TemporalRange {
    /// Build a range from two points
    ///
    /// # Errors
    /// Returns [`TemporalError::InvalidRange`] if the end finishes before the
    /// start begins.
    pub fn from_points(start: TemporalPoint, end: Option<TemporalPoint>) -> Result<Self, TemporalError> {
        if let Some(end) = end {
            if end.to_end_date() < start.to_date() {
                return Err(TemporalError::InvalidRange {
                    start: start.to_string(),
                    end: end.to_string(),
                });
            }
        }

        Ok(Self { start, end })
    }

    /// Build a range from the date fields of a record
    ///
    /// The end boundary is only read when the record has an end year.
    pub fn from_record<R>(record: &R) -> Result<Self, TemporalError>
    where
        R: HasTemporalFields + ?Sized,
    {
        let start = TemporalPoint::from_record(record, false)?;
        let end = match record.end_year() {
            Some(_) => Some(TemporalPoint::from_record(record, true)?),
            None => None,
        };

        Self::from_points(start, end)
    }

    /// Start boundary
    pub fn start(&self) -> &TemporalPoint {
        &self.start
    }

    /// End boundary, `None` when ongoing
    pub fn end(&self) -> Option<&TemporalPoint> {
        self.end.as_ref()
    }

    /// Whether the range has no end
    pub fn is_ongoing(&self) -> bool {
        self.end.is_none()
    }

    /// Whether two ranges share any instant
    ///
    /// Two ongoing ranges are only considered overlapping when they start on
    /// the same instant.
    pub fn overlaps(&self, other: &TemporalRange) -> bool {
        match (&self.end, &other.end) {
            (None, None) => self.start.to_date() == other.start.to_date(),
            (None, Some(other_end)) => !self.start.is_after(other_end),
            (Some(self_end), None) => !other.start.is_after(self_end),
            (Some(self_end), Some(other_end)) => {
                !self.start.is_after(other_end) && !other.start.is_after(self_end)
            }
        }
    }

    /// Whether one range ends the day before the other starts
    ///
    /// Two ongoing ranges have no trailing boundary and are never adjacent.
    pub fn is_adjacent(&self, other: &TemporalRange) -> bool {
        if self.end.is_none() && other.end.is_none() {
            return false;
        }

        ends_day_before(self, other) || ends_day_before(other, self)
    }
}

fn ends_day_before(first: &TemporalRange, second: &TemporalRange) -> bool {
    first
        .end
        .and_then(|end| end.to_end_date().succ_opt())
        .is_some_and(|next| next == second.start.to_date())
}

impl fmt::Display for TemporalRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.end {
            Some(end) => write!(f, "{} – {}", self.start, end),
            None => write!(f, "{} – present", self.start),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DateRecord;

    fn point(y: i32, m: Option<u32>, d: Option<u32>) -> TemporalPoint {
        TemporalPoint::from_parts(y, m, d).unwrap()
    }

    fn closed(start: (i32, u32, u32), end: (i32, u32, u32)) -> TemporalRange {
        TemporalRange::from_points(
            point(start.0, Some(start.1), Some(start.2)),
            Some(point(end.0, Some(end.1), Some(end.2))),
        )
        .unwrap()
    }

    fn ongoing(y: i32, m: Option<u32>, d: Option<u32>) -> TemporalRange {
        TemporalRange::from_points(point(y, m, d), None).unwrap()
    }

    #[test]
    fn test_mixed_precision_range_is_valid() {
        let record = DateRecord::new().starting(1978, None, None).ending(1994, Some(9), None);
        let range = TemporalRange::from_record(&record).unwrap();

        assert_eq!(range.start().to_string(), "1978");
        assert_eq!(range.end().map(|e| e.to_string()), Some("1994-09".to_string()));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let record = DateRecord::new()
            .starting(2000, Some(6), Some(15))
            .ending(2000, Some(6), Some(1));

        let err = TemporalRange::from_record(&record).unwrap_err();
        assert!(matches!(err, TemporalError::InvalidRange { .. }));
    }

    #[test]
    fn test_coarse_end_covering_start_is_valid() {
        // End "2000" reaches Dec 31, so it covers a start of 2000-06-15
        let range = TemporalRange::from_points(point(2000, Some(6), Some(15)), Some(point(2000, None, None)));
        assert!(range.is_ok());
    }

    #[test]
    fn test_record_without_end_year_is_ongoing() {
        let record = DateRecord {
            end_month: Some(4),
            ..DateRecord::new().starting(2015, None, None)
        };
        let range = TemporalRange::from_record(&record).unwrap();
        assert!(range.is_ongoing());
    }

    #[test]
    fn test_closed_overlap() {
        let a = closed((2000, 1, 1), (2005, 12, 31));
        let b = closed((2004, 1, 1), (2010, 12, 31));
        let c = closed((2006, 1, 1), (2010, 12, 31));

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_shared_boundary_day_overlaps() {
        let a = closed((2000, 1, 1), (2000, 6, 1));
        let b = closed((2000, 6, 1), (2000, 12, 31));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_ongoing_against_closed() {
        let open = ongoing(2003, None, None);
        let before = closed((1990, 1, 1), (1995, 12, 31));
        let during = closed((2001, 1, 1), (2004, 6, 30));

        assert!(!open.overlaps(&before));
        assert!(!before.overlaps(&open));
        assert!(open.overlaps(&during));
        assert!(during.overlaps(&open));
    }

    #[test]
    fn test_two_ongoing_ranges() {
        let a = ongoing(2001, Some(1), Some(1));
        let b = ongoing(2001, None, None);
        let c = ongoing(2002, None, None);

        // Same earliest instant
        assert!(a.overlaps(&b));
        assert!(!a.is_adjacent(&b));
        assert!(!a.overlaps(&c));
        assert!(!a.is_adjacent(&c));
    }

    #[test]
    fn test_adjacency() {
        let a = closed((2000, 1, 1), (2000, 12, 31));
        let b = closed((2001, 1, 1), (2001, 12, 31));
        let c = closed((2001, 2, 1), (2001, 12, 31));

        assert!(a.is_adjacent(&b));
        assert!(b.is_adjacent(&a));
        assert!(!a.is_adjacent(&c));
        assert!(!a.is_adjacent(&a));
    }

    #[test]
    fn test_adjacency_across_precisions() {
        // "1999" ends Dec 31, "2000" starts Jan 1
        let a = TemporalRange::from_points(point(1990, None, None), Some(point(1999, None, None))).unwrap();
        let b = ongoing(2000, None, None);
        let month = TemporalRange::from_points(point(1999, Some(3), None), Some(point(1999, Some(2), Some(1))));

        assert!(a.is_adjacent(&b));
        assert!(b.is_adjacent(&a));
        assert!(month.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ongoing(2001, None, None).to_string(), "2001 – present");
        assert_eq!(
            closed((2000, 1, 1), (2000, 12, 31)).to_string(),
            "2000-01-01 – 2000-12-31"
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_point() -> impl Strategy<Value = TemporalPoint> {
        (
            1900i32..2100,
            proptest::option::of(1u32..=12),
            proptest::option::of(1u32..=28),
        )
            .prop_filter_map("valid point", |(y, m, d)| TemporalPoint::from_parts(y, m, d).ok())
    }

    fn arb_range() -> impl Strategy<Value = TemporalRange> {
        (arb_point(), proptest::option::of(arb_point()))
            .prop_filter_map("valid range", |(s, e)| TemporalRange::from_points(s, e).ok())
    }

    proptest! {
        /// Property: overlap is symmetric
        #[test]
        fn test_overlap_symmetric(a in arb_range(), b in arb_range()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        /// Property: adjacency is symmetric
        #[test]
        fn test_adjacency_symmetric(a in arb_range(), b in arb_range()) {
            prop_assert_eq!(a.is_adjacent(&b), b.is_adjacent(&a));
        }

        /// Property: construction succeeds iff the end reaches the start
        #[test]
        fn test_construction_matches_ordering(s in arb_point(), e in arb_point()) {
            let built = TemporalRange::from_points(s, Some(e));
            prop_assert_eq!(built.is_ok(), e.to_end_date() >= s.to_date());
        }
    }
}
