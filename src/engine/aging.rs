// ==========================================
// Warranty Analytics - Request Aging Engine
// ==========================================
// Responsibility: band requests by days for the operational panel
// (0-15 / 16-30 / 31-45 / 46-60 / >60), on two separate axes: open
// requests by days-open, closed requests by closure duration. Pure:
// the reference "today" is a parameter, never read from the ambient
// clock, so the days-open figure for open tickets stays out of the
// MTTC average.
// ==========================================

use chrono::NaiveDate;

use crate::domain::metrics::{AgingBuckets, AgingReport};
use crate::domain::service_request::ServiceRequest;

pub struct AgingEngine;

impl AgingEngine {
    pub fn new() -> Self {
        Self
    }

    /// Days a request has been (or was) open: closure duration for a
    /// closed request, `today - opened_at` for an open one.
    pub fn days_open(&self, request: &ServiceRequest, today: NaiveDate) -> i64 {
        match request.closed_at {
            Some(closed_at) => closed_at
                .signed_duration_since(request.opened_at)
                .num_days(),
            None => today
                .signed_duration_since(request.opened_at.date())
                .num_days(),
        }
    }

    /// Band the still-open requests by days open as of `today`.
    pub fn open_request_buckets(
        &self,
        requests: &[ServiceRequest],
        today: NaiveDate,
    ) -> AgingBuckets {
        let mut buckets = AgingBuckets::default();
        for request in requests.iter().filter(|r| !r.is_closed()) {
            buckets.record(self.days_open(request, today));
        }
        buckets
    }

    /// Band the closed requests by their closure duration. No `today`
    /// reference: the figure is fixed at closure.
    pub fn closed_request_buckets(&self, requests: &[ServiceRequest]) -> AgingBuckets {
        let mut buckets = AgingBuckets::default();
        for request in requests {
            if let Some(closed_at) = request.closed_at {
                buckets.record(closed_at.signed_duration_since(request.opened_at).num_days());
            }
        }
        buckets
    }

    /// Both panel axes in one pass.
    pub fn aging_report(&self, requests: &[ServiceRequest], today: NaiveDate) -> AgingReport {
        AgingReport {
            open: self.open_request_buckets(requests, today),
            closed: self.closed_request_buckets(requests),
        }
    }
}

impl Default for AgingEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request(opened: NaiveDate, closed: Option<NaiveDate>) -> ServiceRequest {
        ServiceRequest {
            request_id: "R1".to_string(),
            development: None,
            constructive_system: None,
            failure_type: None,
            opened_at: opened.and_hms_opt(0, 0, 0).unwrap(),
            closed_at: closed.map(|d| d.and_hms_opt(0, 0, 0).unwrap()),
            commissioning_at: None,
        }
    }

    #[test]
    fn days_open_uses_closure_for_closed_and_today_for_open() {
        let engine = AgingEngine::new();
        let today = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();

        let closed = request(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            Some(NaiveDate::from_ymd_opt(2025, 1, 11).unwrap()),
        );
        assert_eq!(engine.days_open(&closed, today), 10);

        let open = request(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(), None);
        assert_eq!(engine.days_open(&open, today), 30);
    }

    #[test]
    fn buckets_cover_all_bands_and_skip_closed() {
        let engine = AgingEngine::new();
        let today = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let day = |offset: i64| today - chrono::Duration::days(offset);

        let requests = vec![
            request(day(5), None),   // 0-15
            request(day(20), None),  // 16-30
            request(day(40), None),  // 31-45
            request(day(50), None),  // 46-60
            request(day(90), None),  // >60
            request(day(90), Some(day(1))), // closed: not banded
        ];

        let buckets = engine.open_request_buckets(&requests, today);
        assert_eq!(buckets.d0_15, 1);
        assert_eq!(buckets.d16_30, 1);
        assert_eq!(buckets.d31_45, 1);
        assert_eq!(buckets.d46_60, 1);
        assert_eq!(buckets.over_60, 1);
        assert_eq!(buckets.total, 5);
    }

    #[test]
    fn closed_requests_band_by_closure_duration_on_their_own_axis() {
        let engine = AgingEngine::new();
        let today = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let opened = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let close_after = |days: i64| Some(opened + chrono::Duration::days(days));

        let requests = vec![
            request(opened, close_after(10)), // 0-15
            request(opened, close_after(40)), // 31-45
            request(opened, close_after(70)), // >60
            request(opened, None),            // open: other axis only
        ];

        let report = engine.aging_report(&requests, today);

        assert_eq!(report.closed.d0_15, 1);
        assert_eq!(report.closed.d31_45, 1);
        assert_eq!(report.closed.over_60, 1);
        assert_eq!(report.closed.total, 3);

        // the open request banded by today - opened_at (180 days)
        assert_eq!(report.open.total, 1);
        assert_eq!(report.open.over_60, 1);
    }
}
