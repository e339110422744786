// ==========================================
// Warranty Analytics - Service Request Entity
// ==========================================
// One warranty/maintenance ticket, as imported from the
// department's spreadsheet snapshot.
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::Dimension;

/// A single warranty service request (ticket).
///
/// Immutable input to the engines: computation never mutates records.
/// `opened_at` is mandatory — the importer excludes rows without it and
/// reports how many were dropped, so typed records always carry it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequest {
    /// Ticket number from the source sheet (or a generated row id).
    pub request_id: String,

    /// Development / property the ticket belongs to.
    pub development: Option<String>,

    /// Constructive system named in the warranty claim (e.g. "Elevators").
    pub constructive_system: Option<String>,

    /// Failure type, when the warranty label carries one.
    pub failure_type: Option<String>,

    /// Date the request was logged.
    pub opened_at: NaiveDateTime,

    /// Date the request was resolved; `None` while still open.
    pub closed_at: Option<NaiveDateTime>,

    /// Handover/acceptance date of the unit the ticket concerns.
    /// Reference start of healthy operation for MTBF.
    pub commissioning_at: Option<NaiveDateTime>,
}

impl ServiceRequest {
    /// Whether the request has been resolved.
    pub fn is_closed(&self) -> bool {
        self.closed_at.is_some()
    }

    /// Grouping key along the given dimension, `None` when the record
    /// carries no value for it (such records are excluded from that
    /// dimension's aggregation).
    pub fn key_for(&self, dimension: Dimension) -> Option<&str> {
        let key = match dimension {
            Dimension::Development => self.development.as_deref(),
            Dimension::ConstructiveSystem => self.constructive_system.as_deref(),
            Dimension::FailureType => self.failure_type.as_deref(),
        };
        key.map(str::trim).filter(|k| !k.is_empty())
    }
}
