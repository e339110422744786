// ==========================================
// Warranty Analytics - Core Library
// ==========================================
// Reliability metrics (MTBF / MTTR / MTTC / availability) and ABC
// analysis for post-construction warranty service requests.
// Upstream: spreadsheet snapshots. Downstream: dashboard rendering.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Engine layer - pure business rules
pub mod engine;

// Import layer - external data
pub mod importer;

// Repository layer - forecast document persistence
pub mod repository;

// Database infrastructure (connection init / unified PRAGMAs)
pub mod db;

// Logging
pub mod logging;

// API layer - aggregation surface
pub mod api;

// ==========================================
// Core type re-exports
// ==========================================

// Domain types
pub use domain::types::{AbcCategory, AbcEntry, Dimension};

// Domain entities
pub use domain::{
    AgingBuckets, AgingReport, ForecastPlan, ForecastRow, GroupMetrics, ReliabilityReport,
    ServiceRequest,
};

// Engines
pub use engine::{
    AbcClassifier, AbcThresholds, AgingEngine, ForecastEngine, ForecastInput,
    ReliabilityMetricsEngine,
};

// Importer
pub use importer::{ImportStats, RequestImporter, SchemaMapping, UniversalFileParser};

// Repository
pub use repository::ForecastPlanRepository;

// API
pub use api::{DashboardApi, DashboardSummary};

// ==========================================
// Constants
// ==========================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// System name
pub const APP_NAME: &str = "Warranty Analytics";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
