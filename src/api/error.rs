// ==========================================
// Warranty Analytics - API Error Types
// ==========================================
// Tool: thiserror derive macro
// ==========================================

use thiserror::Error;

use crate::engine::error::EngineError;
use crate::importer::error::ImportError;
use crate::repository::error::RepositoryError;

/// API layer error type
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("import failed: {0}")]
    Import(#[from] ImportError),

    #[error("computation failed: {0}")]
    Engine(#[from] EngineError),

    #[error("persistence failed: {0}")]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias
pub type ApiResult<T> = Result<T, ApiError>;
