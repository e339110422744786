// ==========================================
// Warranty Analytics - Dashboard API
// ==========================================
// Responsibility: one call per dashboard render. Loads a spreadsheet
// snapshot through the importer and aggregates every figure a panel
// shows: per-group reliability metrics for the chosen dimension, ABC
// tiers, global MTTC, and open-request aging bands.
// Architecture: API layer -> importer / engine layer; no persistence.
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::metrics::{AgingReport, ReliabilityReport};
use crate::domain::service_request::ServiceRequest;
use crate::domain::types::{AbcEntry, Dimension};
use crate::engine::abc::{AbcClassifier, AbcThresholds};
use crate::engine::aging::AgingEngine;
use crate::engine::reliability::ReliabilityMetricsEngine;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::request_importer::{ImportStats, RequestImporter};
use crate::importer::schema::SchemaMapping;

/// Everything one dashboard render needs, for one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub dimension: Dimension,
    pub total_requests: usize,
    pub open_requests: usize,
    pub closed_requests: usize,
    pub report: ReliabilityReport,
    pub abc: Vec<AbcEntry>,
    /// Open and closed aging bands, as two separate axes.
    pub aging: AgingReport,
}

// ==========================================
// DashboardApi
// ==========================================

pub struct DashboardApi {
    importer: RequestImporter,
    reliability: ReliabilityMetricsEngine,
    aging: AgingEngine,
}

impl DashboardApi {
    pub fn new() -> Self {
        Self::with_mapping(SchemaMapping::default())
    }

    pub fn with_mapping(mapping: SchemaMapping) -> Self {
        Self {
            importer: RequestImporter::new(mapping),
            reliability: ReliabilityMetricsEngine::new(),
            aging: AgingEngine::new(),
        }
    }

    /// Load a spreadsheet snapshot (.csv/.xlsx/.xls) into typed records.
    pub fn load_requests<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> ApiResult<(Vec<ServiceRequest>, ImportStats)> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(ApiError::InvalidInput("snapshot path is empty".to_string()));
        }

        let rows = UniversalFileParser.parse(path)?;
        let (requests, stats) = self.importer.import_rows(&rows)?;
        Ok((requests, stats))
    }

    /// Aggregate one dimension of the snapshot.
    ///
    /// `today` is the reference date for open-request aging; it is a
    /// parameter so renders are reproducible. Records without a value
    /// for the dimension are excluded from grouping and ABC counts.
    pub fn dashboard_summary(
        &self,
        requests: &[ServiceRequest],
        dimension: Dimension,
        thresholds: AbcThresholds,
        today: NaiveDate,
    ) -> ApiResult<DashboardSummary> {
        let report = self
            .reliability
            .compute(requests, |r| r.key_for(dimension).map(str::to_string));

        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for request in requests {
            if let Some(key) = request.key_for(dimension) {
                *counts.entry(key.to_string()).or_insert(0) += 1;
            }
        }
        let abc = AbcClassifier::new(thresholds).classify(&counts);

        let aging = self.aging.aging_report(requests, today);
        let closed_requests = requests.iter().filter(|r| r.is_closed()).count();

        Ok(DashboardSummary {
            dimension,
            total_requests: requests.len(),
            open_requests: requests.len() - closed_requests,
            closed_requests,
            report,
            abc,
            aging,
        })
    }
}

impl Default for DashboardApi {
    fn default() -> Self {
        Self::new()
    }
}
