// ==========================================
// Warranty Analytics - Import Error Types
// ==========================================
// Tool: thiserror derive macro
// ==========================================

use thiserror::Error;

/// Import layer error type
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== file errors =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (expected .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("file read failed: {0}")]
    FileReadError(String),

    #[error("Excel parse failed: {0}")]
    ExcelParseError(String),

    #[error("CSV parse failed: {0}")]
    CsvParseError(String),

    // ===== schema errors =====
    #[error("required column '{field}' not found; accepted spellings: {tried:?}")]
    MissingRequiredColumn { field: String, tried: Vec<String> },

    #[error("schema mapping invalid: {0}")]
    InvalidSchemaMapping(String),

    // ===== generic =====
    #[error("internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::InvalidSchemaMapping(err.to_string())
    }
}

/// Result type alias
pub type ImportResult<T> = Result<T, ImportError>;
