// ==========================================
// Warranty Analytics - Metric Result Types
// ==========================================
// Output shapes of the reliability engine. "Undefined" is always
// `None`, never NaN and never 0.0 — zero downtime and "nothing to
// measure" are different facts and must stay distinguishable.
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-group reliability figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMetrics {
    /// Mean time between failures, hours. `None` when the group has no
    /// commissioning reference at all.
    pub mtbf_hours: Option<f64>,

    /// Mean time to repair, hours, over the closed subset only.
    /// `None` when the group has no closed request.
    pub mttr_hours: Option<f64>,

    /// Steady-state availability, 0-100. Defined only when both MTBF
    /// and MTTR are defined and their sum is positive.
    pub availability_pct: Option<f64>,

    /// Total requests in the group.
    pub sample_size: usize,

    /// Closed requests in the group (the MTTR divisor).
    pub closed_count: usize,
}

/// Full output of one reliability computation run.
///
/// BTreeMap keeps group iteration deterministic for rendering and tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReliabilityReport {
    /// Metrics per group key.
    pub groups: BTreeMap<String, GroupMetrics>,

    /// Mean time to conclusion, days, over all closed requests in the
    /// input (global, not per group). `None` when nothing is closed.
    pub mttc_days: Option<f64>,

    /// Data-quality diagnostic: how many negative raw intervals were
    /// clamped to zero during this run.
    pub clamped_intervals: u32,
}

impl ReliabilityReport {
    pub fn empty() -> Self {
        Self {
            groups: BTreeMap::new(),
            mttc_days: None,
            clamped_intervals: 0,
        }
    }
}

// ==========================================
// Aging bands
// ==========================================
// Bands rendered by the operational panel: 0-15 / 16-30 / 31-45 /
// 46-60 / >60 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AgingBuckets {
    pub d0_15: usize,
    pub d16_30: usize,
    pub d31_45: usize,
    pub d46_60: usize,
    pub over_60: usize,
    /// Requests counted into the bands.
    pub total: usize,
}

impl AgingBuckets {
    /// Add one request by its days figure.
    pub fn record(&mut self, days: i64) {
        match days {
            d if d < 0 => {} // negative span: malformed, not banded
            0..=15 => self.d0_15 += 1,
            16..=30 => self.d16_30 += 1,
            31..=45 => self.d31_45 += 1,
            46..=60 => self.d46_60 += 1,
            _ => self.over_60 += 1,
        }
        if days >= 0 {
            self.total += 1;
        }
    }
}

/// Both aging axes of the operational panel: open requests band by
/// `today - opened_at`, closed requests by their closure duration.
/// The two never mix — "how long has this been waiting" and "how long
/// did repairs take" are different questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AgingReport {
    pub open: AgingBuckets,
    pub closed: AgingBuckets,
}
