// ==========================================
// Warranty Analytics - API Layer
// ==========================================
// Aggregation surface for a presentation layer (dashboard pages).
// Validates inputs at the boundary, then delegates to importer and
// engines. Formatting and chart choices stay with the caller.
// ==========================================

pub mod dashboard_api;
pub mod error;

// Re-export core types
pub use dashboard_api::{DashboardApi, DashboardSummary};
pub use error::{ApiError, ApiResult};
