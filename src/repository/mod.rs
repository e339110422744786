// ==========================================
// Warranty Analytics - Repository Layer
// ==========================================
// Data access for the persisted forecast document. Engines never touch
// this layer: it exists for the editable forecast table only.
// ==========================================

pub mod error;
pub mod forecast_repo;

// Re-export core types
pub use error::{RepositoryError, RepositoryResult};
pub use forecast_repo::ForecastPlanRepository;
