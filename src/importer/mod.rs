// ==========================================
// Warranty Analytics - Import Layer
// ==========================================
// Spreadsheet snapshot -> typed ServiceRequest records.
// Stage 0: file parsing (CSV/Excel -> raw row maps)
// Stage 1: schema resolution (semantic field -> concrete column, once)
// Stage 2: typed mapping (raw rows -> ServiceRequest + import stats)
// ==========================================

pub mod error;
pub mod file_parser;
pub mod request_importer;
pub mod schema;

// Re-export core types
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, FileParser, UniversalFileParser};
pub use request_importer::{ImportStats, RequestImporter};
pub use schema::{ResolvedSchema, SchemaMapping};
