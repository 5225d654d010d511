//! Precision module - the granularity a date boundary is known at

use serde::{Deserialize, Serialize};
use std::fmt;

/// Granularity of a date boundary
///
/// Precisions are totally ordered by specificity:
/// - Year: only the year is known
/// - Month: year and month are known
/// - Day: the exact calendar day is known
///
/// This is the single source of the precision ordering; every comparison
/// between precisions goes through [`Precision::ordinal`] or `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// Year only
    Year,

    /// Year and month
    Month,

    /// Exact day
    Day,
}

impl Precision {
    /// All precisions, coarsest first
    pub const ALL: [Precision; 3] = [Precision::Year, Precision::Month, Precision::Day];

    /// Position in the specificity ordering (Year=0, Month=1, Day=2)
    pub fn ordinal(&self) -> u8 {
        match self {
            Precision::Year => 0,
            Precision::Month => 1,
            Precision::Day => 2,
        }
    }

    /// Get the precision token as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Precision::Year => "year",
            Precision::Month => "month",
            Precision::Day => "day",
        }
    }

    /// Parse a precision token, returning `None` for unrecognized tokens
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "year" => Some(Precision::Year),
            "month" => Some(Precision::Month),
            "day" => Some(Precision::Day),
            _ => None,
        }
    }

    /// The coarser (less specific) of two precisions
    pub fn coarser(self, other: Self) -> Self {
        self.min(other)
    }

    /// Whether this precision is strictly more specific than `other`
    pub fn is_finer_than(&self, other: Precision) -> bool {
        self.ordinal() > other.ordinal()
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Precision {
    type Err = crate::TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| crate::TemporalError::InvalidPrecision(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_ordering() {
        assert!(Precision::Year < Precision::Month);
        assert!(Precision::Month < Precision::Day);
        assert_eq!(Precision::Year.ordinal(), 0);
        assert_eq!(Precision::Month.ordinal(), 1);
        assert_eq!(Precision::Day.ordinal(), 2);
    }

    #[test]
    fn test_ordinal_matches_ord() {
        for a in Precision::ALL {
            for b in Precision::ALL {
                assert_eq!(a < b, a.ordinal() < b.ordinal());
            }
        }
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!(Precision::parse("year"), Some(Precision::Year));
        assert_eq!(Precision::parse("Month"), Some(Precision::Month));
        assert_eq!(Precision::parse(" DAY "), Some(Precision::Day));
        assert_eq!(Precision::parse("week"), None);
        assert_eq!(Precision::parse(""), None);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "decade".parse::<Precision>().unwrap_err();
        assert!(err.to_string().contains("decade"));
    }

    #[test]
    fn test_coarser() {
        assert_eq!(Precision::Day.coarser(Precision::Month), Precision::Month);
        assert_eq!(Precision::Year.coarser(Precision::Day), Precision::Year);
        assert_eq!(Precision::Month.coarser(Precision::Month), Precision::Month);
    }

    #[test]
    fn test_serde_tokens() {
        let json = serde_json::to_string(&Precision::Month).unwrap();
        assert_eq!(json, "\"month\"");
        let parsed: Precision = serde_json::from_str("\"day\"").unwrap();
        assert_eq!(parsed, Precision::Day);
    }
}
