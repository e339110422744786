// ==========================================
// Warranty Analytics - Domain Type Definitions
// ==========================================
// Aggregation dimensions and ABC (Pareto) tiers.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Aggregation Dimension
// ==========================================
// A record is classified along several independent dimensions at once;
// the reliability engine runs once per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Development,
    ConstructiveSystem,
    FailureType,
}

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Development => "DEVELOPMENT",
            Dimension::ConstructiveSystem => "CONSTRUCTIVE_SYSTEM",
            Dimension::FailureType => "FAILURE_TYPE",
        }
    }

    pub fn parse(s: &str) -> Option<Dimension> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "DEVELOPMENT" => Some(Dimension::Development),
            "CONSTRUCTIVE_SYSTEM" | "SYSTEM" => Some(Dimension::ConstructiveSystem),
            "FAILURE_TYPE" | "FAILURE" => Some(Dimension::FailureType),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// ABC Category (Pareto tier)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AbcCategory {
    A, // few groups, most of the incidents
    B,
    C, // long tail
}

impl fmt::Display for AbcCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbcCategory::A => write!(f, "A"),
            AbcCategory::B => write!(f, "B"),
            AbcCategory::C => write!(f, "C"),
        }
    }
}

/// One row of an ABC classification, in descending-count order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbcEntry {
    pub group_key: String,
    pub count: u64,
    /// Cumulative share of the total count, inclusive of this group, 0-100.
    pub cumulative_pct: f64,
    pub category: AbcCategory,
}
