// ==========================================
// Warranty Analytics - Request Importer
// ==========================================
// Stage 2: raw row maps -> typed ServiceRequest records.
// Rows without a parseable opening date are excluded and counted —
// the engines require opened_at and never see untyped data.
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;

use crate::domain::service_request::ServiceRequest;
use crate::importer::error::ImportResult;
use crate::importer::schema::{ResolvedSchema, SchemaMapping};

/// Outcome of one typed-mapping pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportStats {
    /// Generated id tagging this import run in the logs.
    pub batch_id: String,
    pub total_rows: usize,
    pub imported: usize,
    /// Rows dropped for a missing or unparseable opening date.
    pub skipped_missing_opened_at: usize,
    /// Non-required date cells that failed to parse (left as None).
    pub unparseable_dates: usize,
}

pub struct RequestImporter {
    mapping: SchemaMapping,
}

impl RequestImporter {
    pub fn new(mapping: SchemaMapping) -> Self {
        Self { mapping }
    }

    pub fn with_default_mapping() -> Self {
        Self::new(SchemaMapping::default())
    }

    /// Map raw rows to typed records. Schema resolution happens once,
    /// against the union of headers seen in the rows.
    pub fn import_rows(
        &self,
        rows: &[HashMap<String, String>],
    ) -> ImportResult<(Vec<ServiceRequest>, ImportStats)> {
        let mut headers: Vec<String> = Vec::new();
        for row in rows {
            for key in row.keys() {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
        }
        let schema = self.mapping.resolve(&headers)?;

        let mut stats = ImportStats {
            batch_id: uuid::Uuid::new_v4().to_string(),
            total_rows: rows.len(),
            ..ImportStats::default()
        };
        let mut requests = Vec::with_capacity(rows.len());

        for (row_idx, row) in rows.iter().enumerate() {
            let row_number = row_idx + 2; // 1-based, after the header row

            let opened_at = match self.date_field(row, Some(schema.opened_at.as_str()), &mut stats) {
                Some(date) => date,
                None => {
                    stats.skipped_missing_opened_at += 1;
                    tracing::warn!(row = row_number, "row skipped: no parseable opening date");
                    continue;
                }
            };

            let closed_at = self.date_field(row, schema.closed_at.as_deref(), &mut stats);
            let commissioning_at =
                self.date_field(row, schema.commissioning_at.as_deref(), &mut stats);

            let request_id = Self::cell(row, schema.request_id.as_deref())
                .unwrap_or_else(|| format!("ROW-{row_number}"));

            // Prefer dedicated columns; fall back to splitting the
            // combined warranty label.
            let mut constructive_system = Self::cell(row, schema.constructive_system.as_deref());
            let mut failure_type = Self::cell(row, schema.failure_type.as_deref());
            if constructive_system.is_none() && failure_type.is_none() {
                if let Some(label) = Self::cell(row, schema.warranty_label.as_deref()) {
                    let (system, failure) = split_warranty_label(&label);
                    constructive_system = Some(system);
                    failure_type = failure;
                }
            }

            requests.push(ServiceRequest {
                request_id,
                development: Self::cell(row, schema.development.as_deref()),
                constructive_system,
                failure_type,
                opened_at,
                closed_at,
                commissioning_at,
            });
            stats.imported += 1;
        }

        tracing::info!(
            batch_id = %stats.batch_id,
            total = stats.total_rows,
            imported = stats.imported,
            skipped = stats.skipped_missing_opened_at,
            "service requests imported"
        );
        Ok((requests, stats))
    }

    /// Resolve-once variant for callers that already hold a schema.
    pub fn resolve_schema(&self, headers: &[String]) -> ImportResult<ResolvedSchema> {
        self.mapping.resolve(headers)
    }

    fn cell(row: &HashMap<String, String>, column: Option<&str>) -> Option<String> {
        let value = row.get(column?)?.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    fn date_field(
        &self,
        row: &HashMap<String, String>,
        column: Option<&str>,
        stats: &mut ImportStats,
    ) -> Option<NaiveDateTime> {
        let raw = Self::cell(row, column)?;
        match parse_date(&raw) {
            Some(date) => Some(date),
            None => {
                stats.unparseable_dates += 1;
                tracing::debug!(value = %raw, "unparseable date cell");
                None
            }
        }
    }
}

/// Parse the date spellings the workbooks use: day-first Brazilian
/// format, ISO date, ISO datetime.
fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    const DATETIME_FORMATS: [&str; 3] = ["%d/%m/%Y %H:%M:%S", "%d/%m/%Y %H:%M", "%Y-%m-%d %H:%M:%S"];
    const DATE_FORMATS: [&str; 2] = ["%d/%m/%Y", "%Y-%m-%d"];

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Split a combined warranty label ("System - Failure" or
/// "System: Failure") into constructive system and failure type.
fn split_warranty_label(label: &str) -> (String, Option<String>) {
    let normalized = label.replacen(" - ", ": ", 1);
    match normalized.split_once(':') {
        Some((system, failure)) if !failure.trim().is_empty() => {
            (system.trim().to_string(), Some(failure.trim().to_string()))
        }
        _ => (label.trim().to_string(), None),
    }
}
