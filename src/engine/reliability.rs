// ==========================================
// Warranty Analytics - Reliability Metrics Engine
// ==========================================
// Responsibility: per-group MTBF / MTTR / availability plus the global
// MTTC figure, from a snapshot of service requests.
// Input: service requests + a grouping function (or pre-grouped map)
// Output: ReliabilityReport
// ==========================================
// Policies:
// - undefined metrics are None, never 0.0
// - negative raw intervals clamp to zero and are counted as a
//   data-quality diagnostic
// - an open prior request contributes a zero interval to the MTBF
//   chain (the chain does not stop)
// ==========================================

use chrono::NaiveDateTime;
use std::collections::BTreeMap;

use crate::domain::metrics::{GroupMetrics, ReliabilityReport};
use crate::domain::service_request::ServiceRequest;

const SECS_PER_HOUR: f64 = 3_600.0;
const HOURS_PER_DAY: f64 = 24.0;

// ==========================================
// ReliabilityMetricsEngine
// ==========================================
/// Stateless engine: a pure function of its input collection. Safe to
/// call concurrently for independent inputs.
pub struct ReliabilityMetricsEngine;

impl ReliabilityMetricsEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compute the report for one aggregation dimension.
    ///
    /// `key_fn` extracts the group key; records yielding `None` are
    /// excluded from grouping (they still count toward the global MTTC,
    /// which ignores grouping entirely).
    pub fn compute<F>(&self, requests: &[ServiceRequest], key_fn: F) -> ReliabilityReport
    where
        F: Fn(&ServiceRequest) -> Option<String>,
    {
        let mut grouped: BTreeMap<String, Vec<&ServiceRequest>> = BTreeMap::new();
        for request in requests {
            if let Some(key) = key_fn(request) {
                grouped.entry(key).or_default().push(request);
            }
        }

        let mut report = self.compute_grouped(&grouped);
        // MTTC spans the whole input, not just the grouped subset.
        report.mttc_days = Self::mttc_days(requests.iter());
        report
    }

    /// Compute the report for an already-grouped input.
    pub fn compute_grouped(
        &self,
        grouped: &BTreeMap<String, Vec<&ServiceRequest>>,
    ) -> ReliabilityReport {
        let mut report = ReliabilityReport::empty();

        for (key, members) in grouped {
            if members.is_empty() {
                // zero qualifying records: no entry, not a zeroed one
                continue;
            }
            let (metrics, clamps) = self.compute_group(members);
            report.clamped_intervals += clamps;
            report.groups.insert(key.clone(), metrics);
        }

        report.mttc_days = Self::mttc_days(grouped.values().flatten().copied());
        report
    }

    // ==========================================
    // Per-group computation
    // ==========================================

    fn compute_group(&self, members: &[&ServiceRequest]) -> (GroupMetrics, u32) {
        let mut clamps = 0u32;

        // Total order: opened_at, then request_id, so ties never depend
        // on input order.
        let mut sorted: Vec<&ServiceRequest> = members.to_vec();
        sorted.sort_by(|a, b| {
            a.opened_at
                .cmp(&b.opened_at)
                .then_with(|| a.request_id.cmp(&b.request_id))
        });

        let mtbf_hours = self.mtbf_hours(&sorted, &mut clamps);
        let (mttr_hours, closed_count) = self.mttr_hours(&sorted, &mut clamps);
        let availability_pct = Self::availability_pct(mtbf_hours, mttr_hours);

        let metrics = GroupMetrics {
            mtbf_hours,
            mttr_hours,
            availability_pct,
            sample_size: sorted.len(),
            closed_count,
        };
        (metrics, clamps)
    }

    /// MTBF chain: first interval runs from the earliest commissioning
    /// date in the group to the first opening; each later interval runs
    /// from the previous close to the next opening.
    fn mtbf_hours(&self, sorted: &[&ServiceRequest], clamps: &mut u32) -> Option<f64> {
        let min_commissioning = sorted
            .iter()
            .filter_map(|r| r.commissioning_at)
            .min()?; // no commissioning reference anywhere: undefined

        let mut good_hours =
            Self::clamped_hours(min_commissioning, sorted[0].opened_at, clamps);

        for window in sorted.windows(2) {
            let (prev, current) = (window[0], window[1]);
            // A still-open prior request contributes a zero interval;
            // the chain continues.
            if let Some(prev_closed) = prev.closed_at {
                good_hours += Self::clamped_hours(prev_closed, current.opened_at, clamps);
            }
        }

        Some(good_hours / sorted.len() as f64)
    }

    /// MTTR over the closed subset only. Open requests carry no downtime
    /// estimate and must not dilute the average.
    fn mttr_hours(&self, sorted: &[&ServiceRequest], clamps: &mut u32) -> (Option<f64>, usize) {
        let mut downtime_hours = 0.0;
        let mut closed_count = 0usize;

        for request in sorted {
            if let Some(closed_at) = request.closed_at {
                downtime_hours += Self::clamped_hours(request.opened_at, closed_at, clamps);
                closed_count += 1;
            }
        }

        if closed_count == 0 {
            (None, 0)
        } else {
            (Some(downtime_hours / closed_count as f64), closed_count)
        }
    }

    /// Steady-state availability. Undefined propagates: never substitute
    /// zero for a missing MTBF or MTTR.
    fn availability_pct(mtbf: Option<f64>, mttr: Option<f64>) -> Option<f64> {
        match (mtbf, mttr) {
            (Some(up), Some(down)) if up + down > 0.0 => Some(100.0 * up / (up + down)),
            _ => None,
        }
    }

    // ==========================================
    // Global MTTC
    // ==========================================

    /// Mean completion time in days over all closed requests. Open
    /// requests never enter this average.
    fn mttc_days<'a, I>(requests: I) -> Option<f64>
    where
        I: Iterator<Item = &'a ServiceRequest>,
    {
        let mut total_hours = 0.0;
        let mut closed = 0usize;
        let mut ignored_clamps = 0u32;

        for request in requests {
            if let Some(closed_at) = request.closed_at {
                total_hours += Self::clamped_hours(request.opened_at, closed_at, &mut ignored_clamps);
                closed += 1;
            }
        }

        if closed == 0 {
            None
        } else {
            Some(total_hours / HOURS_PER_DAY / closed as f64)
        }
    }

    /// Fractional hours from `from` to `to`, clamped at zero. A negative
    /// raw difference is malformed data: it is clamped, counted, and
    /// never allowed to reduce a total.
    fn clamped_hours(from: NaiveDateTime, to: NaiveDateTime, clamps: &mut u32) -> f64 {
        let hours = to.signed_duration_since(from).num_seconds() as f64 / SECS_PER_HOUR;
        if hours < 0.0 {
            *clamps += 1;
            0.0
        } else {
            hours
        }
    }
}

impl Default for ReliabilityMetricsEngine {
    fn default() -> Self {
        Self::new()
    }
}
