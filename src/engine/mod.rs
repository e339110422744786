// ==========================================
// Warranty Analytics - Engine Layer
// ==========================================
// Pure business rules: no I/O, no shared state, no clock access.
// Every engine is a pure function of its inputs; data-quality issues
// degrade to undefined results, only configuration misuse is an error.
// ==========================================

pub mod abc;
pub mod aging;
pub mod error;
pub mod forecast;
pub mod reliability;

// Re-export core engines
pub use abc::{AbcClassifier, AbcThresholds};
pub use aging::AgingEngine;
pub use error::{EngineError, EngineResult};
pub use forecast::{ForecastEngine, ForecastInput};
pub use reliability::ReliabilityMetricsEngine;
