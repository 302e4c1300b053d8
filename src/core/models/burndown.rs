//! Burndown series model

use serde::{Deserialize, Serialize};

/// One point of a burndown series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurndownPoint {
    /// Week offset from the sprint start (0-based)
    pub week_index: i64,
    /// Cards still to be done; fractional on the expected series
    pub remaining_count: f64,
}

impl BurndownPoint {
    /// Create a point
    #[must_use]
    pub const fn new(week_index: i64, remaining_count: f64) -> Self {
        Self {
            week_index,
            remaining_count,
        }
    }
}

/// Shape of the expected (idealized) series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdealCurve {
    /// Straight line from full scope at week 0 to zero at the last week
    Linear,
    /// Steps of `total / (weeks + 1)`, leaving a refinement week before the
    /// drop to zero at the last week
    #[default]
    Refinement,
}

impl std::fmt::Display for IdealCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Refinement => write!(f, "refinement"),
        }
    }
}

impl std::str::FromStr for IdealCurve {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "refinement" => Ok(Self::Refinement),
            _ => Err(format!("Invalid curve: {s}. Use: linear, refinement")),
        }
    }
}

/// Expected and actual remaining work, indexed by week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Burndown {
    /// Idealized series
    pub expected: Vec<BurndownPoint>,
    /// Observed series
    pub actual: Vec<BurndownPoint>,
    /// Number of sprint cards (scope at week 0)
    pub total_count: usize,
    /// Whole weeks in the sprint; the series hold `week_count + 1` points
    pub week_count: i64,
}

impl Burndown {
    /// Cards remaining on the last point of the actual series
    #[must_use]
    pub fn remaining(&self) -> Option<f64> {
        self.actual.last().map(|p| p.remaining_count)
    }
}
