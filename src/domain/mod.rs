// ==========================================
// Warranty Analytics - Domain Layer
// ==========================================
// Entities and value types for warranty service-request analytics.
// No data access, no engine logic here.
// ==========================================

pub mod forecast;
pub mod metrics;
pub mod service_request;
pub mod types;

// Re-export core types
pub use forecast::{ForecastPlan, ForecastRow};
pub use metrics::{AgingBuckets, AgingReport, GroupMetrics, ReliabilityReport};
pub use service_request::ServiceRequest;
pub use types::{AbcCategory, AbcEntry, Dimension};
