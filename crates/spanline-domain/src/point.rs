//! Temporal point module - one calendar boundary at a given precision

use crate::record::{derive_precision, Boundary, HasTemporalFields};
use crate::{Precision, TemporalError};
use chrono::{Months, NaiveDate};
use std::fmt;

/// A calendar boundary known to year, month or day precision
///
/// A point stands for every instant consistent with what is known about it.
/// `1994-09` covers the whole of September 1994, so its earliest instant is
/// the 1st and its latest the 30th. Both instants are resolved once at
/// construction; a point that exists is always a real calendar date.
///
/// # Examples
///
/// ```
/// use spanline_domain::{Precision, TemporalPoint};
///
/// let point = TemporalPoint::from_parts(1994, Some(9), None).unwrap();
/// assert_eq!(point.precision(), Precision::Month);
/// assert_eq!(point.to_end_date().to_string(), "1994-09-30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemporalPoint {
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
    precision: Precision,
    earliest: NaiveDate,
    latest: NaiveDate,
}

impl TemporalPoint {
    /// Build a point from its parts
    ///
    /// The precision is derived: Day if a day is given, Month if only a month
    /// is given, Year otherwise.
    ///
    /// # Errors
    /// Returns [`TemporalError::InvalidDate`] when a month or day is out of
    /// range or the parts do not name a real date (e.g. 2001-02-29).
    pub fn from_parts(year: i32, month: Option<u32>, day: Option<u32>) -> Result<Self, TemporalError> {
        if let Some(m) = month {
            if !(1..=12).contains(&m) {
                return Err(TemporalError::InvalidDate(format!("month {} is out of range", m)));
            }
        }
        if let Some(d) = day {
            if !(1..=31).contains(&d) {
                return Err(TemporalError::InvalidDate(format!("day {} is out of range", d)));
            }
        }

        let precision = derive_precision(month, day);
        let earliest = NaiveDate::from_ymd_opt(year, month.unwrap_or(1), day.unwrap_or(1))
            .ok_or_else(|| {
                TemporalError::InvalidDate(render(year, month, day, precision))
            })?;

        let latest = match precision {
            Precision::Year => NaiveDate::from_ymd_opt(year, 12, 31),
            Precision::Month => earliest
                .checked_add_months(Months::new(1))
                .and_then(|next| next.pred_opt()),
            Precision::Day => Some(earliest),
        }
        .ok_or_else(|| TemporalError::InvalidDate(render(year, month, day, precision)))?;

        Ok(Self {
            year,
            month,
            day,
            precision,
            earliest,
            latest,
        })
    }

    /// Build a point from one boundary of a record
    ///
    /// A month or day of zero is treated as absent.
    ///
    /// # Errors
    /// Returns [`TemporalError::MissingYear`] if the boundary has no year.
    pub fn from_record<R>(record: &R, is_end: bool) -> Result<Self, TemporalError>
    where
        R: HasTemporalFields + ?Sized,
    {
        let boundary = Boundary::from_is_end(is_end);
        let (year, month, day) = record.boundary_parts(boundary);
        let year = year.ok_or(TemporalError::MissingYear(boundary))?;

        Self::from_parts(year, month.filter(|m| *m != 0), day.filter(|d| *d != 0))
    }

    /// Year component
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month component, if known
    pub fn month(&self) -> Option<u32> {
        self.month
    }

    /// Day component, if known
    pub fn day(&self) -> Option<u32> {
        self.day
    }

    /// Precision this point is known at
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Earliest date consistent with this point
    pub fn to_date(&self) -> NaiveDate {
        self.earliest
    }

    /// Latest date consistent with this point
    pub fn to_end_date(&self) -> NaiveDate {
        self.latest
    }

    /// Whether this point starts strictly before `other` starts
    pub fn is_before(&self, other: &TemporalPoint) -> bool {
        self.to_date() < other.to_date()
    }

    /// Whether this point ends strictly after `other` ends
    ///
    /// Compared on latest instants, so that an end-like boundary known only
    /// to a month is not judged by the first day of that month.
    pub fn is_after(&self, other: &TemporalPoint) -> bool {
        self.to_end_date() > other.to_end_date()
    }
}

impl fmt::Display for TemporalPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self.year, self.month, self.day, self.precision))
    }
}

fn render(year: i32, month: Option<u32>, day: Option<u32>, precision: Precision) -> String {
    match precision {
        Precision::Year => format!("{:04}", year),
        Precision::Month => format!("{:04}-{:02}", year, month.unwrap_or(1)),
        Precision::Day => format!("{:04}-{:02}-{:02}", year, month.unwrap_or(1), day.unwrap_or(1)),
    }
}
