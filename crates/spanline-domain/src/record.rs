//! Date-bearing records supplied by the surrounding application
//!
//! The engine never sees a persistence type. It reads dates through the
//! [`HasTemporalFields`] capability, which [`DateRecord`] implements as a plain
//! snapshot DTO.

use crate::{Precision, SpanId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which boundary of a record is being read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// The start boundary
    Start,
    /// The end boundary
    End,
}

impl Boundary {
    /// Select the boundary from an `is_end` flag
    pub fn from_is_end(is_end: bool) -> Self {
        if is_end {
            Boundary::End
        } else {
            Boundary::Start
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::Start => f.write_str("start"),
            Boundary::End => f.write_str("end"),
        }
    }
}

/// Read-only access to the date fields of a record
///
/// Month and day values of zero are treated as absent by the point builder,
/// so implementors may pass through raw column values.
pub trait HasTemporalFields {
    /// Start year, if known
    fn start_year(&self) -> Option<i32>;
    /// Start month (1-12), if known
    fn start_month(&self) -> Option<u32>;
    /// Start day (1-31), if known
    fn start_day(&self) -> Option<u32>;
    /// End year, if the record has ended
    fn end_year(&self) -> Option<i32>;
    /// End month (1-12), if known
    fn end_month(&self) -> Option<u32>;
    /// End day (1-31), if known
    fn end_day(&self) -> Option<u32>;

    /// Stored precision token for the start boundary
    fn start_precision(&self) -> Option<&str> {
        None
    }

    /// Stored precision token for the end boundary
    fn end_precision(&self) -> Option<&str> {
        None
    }

    /// Year, month and day of one boundary
    fn boundary_parts(&self, boundary: Boundary) -> (Option<i32>, Option<u32>, Option<u32>) {
        match boundary {
            Boundary::Start => (self.start_year(), self.start_month(), self.start_day()),
            Boundary::End => (self.end_year(), self.end_month(), self.end_day()),
        }
    }
}

/// Snapshot of a span's dates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRecord {
    /// Identity of the span this snapshot was taken from
    #[serde(default)]
    pub id: SpanId,

    /// Start year
    #[serde(default)]
    pub start_year: Option<i32>,
    /// Start month
    #[serde(default)]
    pub start_month: Option<u32>,
    /// Start day
    #[serde(default)]
    pub start_day: Option<u32>,
    /// Precision token stored for the start boundary
    #[serde(default)]
    pub start_precision: Option<String>,

    /// End year
    #[serde(default)]
    pub end_year: Option<i32>,
    /// End month
    #[serde(default)]
    pub end_month: Option<u32>,
    /// End day
    #[serde(default)]
    pub end_day: Option<u32>,
    /// Precision token stored for the end boundary
    #[serde(default)]
    pub end_precision: Option<String>,
}

impl DateRecord {
    /// Create an undated record with a fresh identity
    pub fn new() -> Self {
        Self::with_id(SpanId::new())
    }

    /// Create an undated record with the given identity
    pub fn with_id(id: SpanId) -> Self {
        Self {
            id,
            start_year: None,
            start_month: None,
            start_day: None,
            start_precision: None,
            end_year: None,
            end_month: None,
            end_day: None,
            end_precision: None,
        }
    }

    /// Set the start boundary, deriving its precision token
    pub fn starting(mut self, year: i32, month: Option<u32>, day: Option<u32>) -> Self {
        self.start_year = Some(year);
        self.start_month = month;
        self.start_day = day;
        self.start_precision = Some(derive_precision(month, day).as_str().to_string());
        self
    }

    /// Set the end boundary, deriving its precision token
    pub fn ending(mut self, year: i32, month: Option<u32>, day: Option<u32>) -> Self {
        self.end_year = Some(year);
        self.end_month = month;
        self.end_day = day;
        self.end_precision = Some(derive_precision(month, day).as_str().to_string());
        self
    }
}

impl Default for DateRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl HasTemporalFields for DateRecord {
    fn start_year(&self) -> Option<i32> {
        self.start_year
    }

    fn start_month(&self) -> Option<u32> {
        self.start_month
    }

    fn start_day(&self) -> Option<u32> {
        self.start_day
    }

    fn end_year(&self) -> Option<i32> {
        self.end_year
    }

    fn end_month(&self) -> Option<u32> {
        self.end_month
    }

    fn end_day(&self) -> Option<u32> {
        self.end_day
    }

    fn start_precision(&self) -> Option<&str> {
        self.start_precision.as_deref()
    }

    fn end_precision(&self) -> Option<&str> {
        self.end_precision.as_deref()
    }
}

/// Precision implied by which parts are present
pub(crate) fn derive_precision(month: Option<u32>, day: Option<u32>) -> Precision {
    match (month, day) {
        (_, Some(_)) => Precision::Day,
        (Some(_), None) => Precision::Month,
        (None, None) => Precision::Year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_derives_precision_tokens() {
        let record = DateRecord::new().starting(1978, None, None).ending(1994, Some(9), None);

        assert_eq!(record.start_precision(), Some("year"));
        assert_eq!(record.end_precision(), Some("month"));
        assert_eq!(record.boundary_parts(Boundary::End), (Some(1994), Some(9), None));
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let record: DateRecord =
            serde_json::from_str(r#"{"start_year": 2001, "start_month": 0}"#).unwrap();

        assert_eq!(record.start_year, Some(2001));
        assert_eq!(record.start_month, Some(0));
        assert_eq!(record.end_year, None);
        assert_eq!(record.start_precision(), None);
    }

    #[test]
    fn test_boundary_display() {
        assert_eq!(Boundary::Start.to_string(), "start");
        assert_eq!(Boundary::from_is_end(true), Boundary::End);
    }
}
