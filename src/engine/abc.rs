// ==========================================
// Warranty Analytics - ABC (Pareto) Classifier
// ==========================================
// Responsibility: tier groups by cumulative share of incident counts.
// Thresholds are configuration, not constants: the department's pages
// historically used both 80/95 and 70/90.
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::types::{AbcCategory, AbcEntry};
use crate::engine::error::{EngineError, EngineResult};

// ==========================================
// Thresholds
// ==========================================

/// ABC boundary percentages. Category A covers cumulative share
/// <= `a_pct`, B covers (a_pct, b_pct], C the rest.
///
/// Fields stay private and deserialization funnels through `new()`,
/// so an invalid pair cannot exist — not even from a config file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAbcThresholds")]
pub struct AbcThresholds {
    a_pct: f64,
    b_pct: f64,
}

/// Unvalidated wire form of `AbcThresholds`.
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawAbcThresholds {
    a_pct: f64,
    b_pct: f64,
}

impl TryFrom<RawAbcThresholds> for AbcThresholds {
    type Error = EngineError;

    fn try_from(raw: RawAbcThresholds) -> Result<Self, Self::Error> {
        AbcThresholds::new(raw.a_pct, raw.b_pct)
    }
}

impl AbcThresholds {
    /// Validated constructor: both thresholds in (0, 100) exclusive,
    /// strictly ordered. The only hard error in the engine layer.
    pub fn new(a_pct: f64, b_pct: f64) -> EngineResult<Self> {
        let in_range = |v: f64| v > 0.0 && v < 100.0;
        if !in_range(a_pct) || !in_range(b_pct) || a_pct >= b_pct {
            return Err(EngineError::InvalidThresholds { a_pct, b_pct });
        }
        Ok(Self { a_pct, b_pct })
    }

    pub fn a_pct(&self) -> f64 {
        self.a_pct
    }

    pub fn b_pct(&self) -> f64 {
        self.b_pct
    }

    fn category_for(&self, cumulative_pct: f64) -> AbcCategory {
        if cumulative_pct <= self.a_pct {
            AbcCategory::A
        } else if cumulative_pct <= self.b_pct {
            AbcCategory::B
        } else {
            AbcCategory::C
        }
    }
}

impl Default for AbcThresholds {
    fn default() -> Self {
        // 80/95 is the department default; 70/90 stays reachable via new().
        Self { a_pct: 80.0, b_pct: 95.0 }
    }
}

// ==========================================
// AbcClassifier
// ==========================================

pub struct AbcClassifier {
    thresholds: AbcThresholds,
}

impl AbcClassifier {
    pub fn new(thresholds: AbcThresholds) -> Self {
        Self { thresholds }
    }

    /// Classify incident counts into A/B/C tiers.
    ///
    /// Groups are consumed in descending-count order; equal counts break
    /// by group key ascending so the output never depends on map
    /// iteration order. Cumulative share is inclusive of the group it is
    /// computed for. An empty or all-zero input yields an empty result.
    pub fn classify(&self, counts: &BTreeMap<String, u64>) -> Vec<AbcEntry> {
        let total: u64 = counts.values().sum();
        if total == 0 {
            return Vec::new();
        }

        let mut ordered: Vec<(&String, u64)> =
            counts.iter().map(|(k, v)| (k, *v)).collect();
        ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let mut cumulative = 0u64;
        ordered
            .into_iter()
            .map(|(key, count)| {
                cumulative += count;
                let cumulative_pct = 100.0 * cumulative as f64 / total as f64;
                AbcEntry {
                    group_key: key.clone(),
                    count,
                    cumulative_pct,
                    category: self.thresholds.category_for(cumulative_pct),
                }
            })
            .collect()
    }
}
