//! Time unit — the granularity vocabulary of duration rule operators.
//!
//! Rule data expresses eligibility windows as an amount plus a unit token
//! (e.g. "valid for 270 days"). The evaluator pulls the unit token out of
//! the JSON operator argument and must know whether it names a recognized
//! granularity before doing any date arithmetic. This module is that
//! vocabulary: a closed set of four units and an exact-match test.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidTimeUnit;

/// A calendar/clock granularity accepted by duration rule operators.
///
/// The set is closed: rule data may only name these four units, by their
/// lowercase canonical names. Matching is exact, with no trimming and no
/// case folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Year,
    Month,
    Day,
    Hour,
}

impl TimeUnit {
    /// Every recognized unit, coarse to fine.
    ///
    /// Useful for diagnostics that list the accepted names.
    pub const ALL: [Self; 4] = [Self::Year, Self::Month, Self::Day, Self::Hour];

    /// The canonical name used in rule data.
    #[must_use]
    pub fn canonical_name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }

    /// Whether `name` is byte-for-byte equal to a canonical unit name.
    ///
    /// An unrecognized token is a normal `false`, never an error.
    #[must_use]
    pub fn is_time_unit_name(name: &str) -> bool {
        Self::ALL.iter().any(|unit| unit.canonical_name() == name)
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl FromStr for TimeUnit {
    type Err = InvalidTimeUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" => Ok(Self::Year),
            "month" => Ok(Self::Month),
            "day" => Ok(Self::Day),
            "hour" => Ok(Self::Hour),
            other => Err(InvalidTimeUnit {
                input: other.to_string(),
            }),
        }
    }
}
