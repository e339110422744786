// ==========================================
// Warranty Analytics - Engine Error Types
// ==========================================
// Tool: thiserror derive macro
// ==========================================

use thiserror::Error;

/// Engine layer error type.
///
/// Data quality never errors (it degrades to undefined metrics);
/// configuration misuse is the only hard failure.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid ABC thresholds: a_pct={a_pct}, b_pct={b_pct} (require 0 < a_pct < b_pct < 100)")]
    InvalidThresholds { a_pct: f64, b_pct: f64 },

    #[error("invalid forecast horizon: from={from} to={to}")]
    InvalidForecastHorizon { from: i32, to: i32 },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias
pub type EngineResult<T> = Result<T, EngineError>;
