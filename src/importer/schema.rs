// ==========================================
// Warranty Analytics - Schema Mapping
// ==========================================
// Stage 1: declarative mapping from semantic fields to the header
// spellings seen in department workbooks, resolved ONCE per load
// against the actual header set (case- and whitespace-insensitive).
// Downstream code only ever sees resolved column names — no string
// matching is deferred into the computation path.
// ==========================================

use serde::{Deserialize, Serialize};

use crate::importer::error::{ImportError, ImportResult};

/// Accepted header spellings per semantic field. Serde-deserializable so
/// a deployment can extend the spellings without a code change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaMapping {
    pub request_id: Vec<String>,
    pub development: Vec<String>,
    /// Combined "System - Failure" label, split during typed mapping.
    pub warranty_label: Vec<String>,
    pub constructive_system: Vec<String>,
    pub failure_type: Vec<String>,
    pub opened_at: Vec<String>,
    pub closed_at: Vec<String>,
    pub commissioning_at: Vec<String>,
}

impl Default for SchemaMapping {
    fn default() -> Self {
        // Spellings observed across the department's workbooks.
        Self {
            request_id: vec!["N°".into(), "Nº".into(), "Numero".into(), "Número".into()],
            development: vec!["Empreendimento".into()],
            warranty_label: vec!["Garantia Solicitada".into()],
            constructive_system: vec!["Sistema Construtivo".into()],
            failure_type: vec!["Tipo de Falha".into()],
            opened_at: vec![
                "Data de Abertura".into(),
                "Solicitação Abertura".into(),
                "Abertura".into(),
            ],
            closed_at: vec![
                "Encerramento".into(),
                "Solicitação Encerramento".into(),
                "Data de Encerramento".into(),
            ],
            commissioning_at: vec!["Data CVCO".into(), "Data_CVCO".into(), "CVCO".into()],
        }
    }
}

impl SchemaMapping {
    /// Load a mapping from its JSON form.
    pub fn from_json(json: &str) -> ImportResult<Self> {
        let mapping: SchemaMapping = serde_json::from_str(json)?;
        if mapping.opened_at.is_empty() {
            return Err(ImportError::InvalidSchemaMapping(
                "opened_at must list at least one accepted spelling".to_string(),
            ));
        }
        Ok(mapping)
    }

    /// Resolve against the actual headers of a parsed sheet.
    ///
    /// `opened_at` is the only required field: metric computation is
    /// impossible without opening dates, so its absence fails the load.
    /// Every other field resolves to `None` when no spelling matches.
    pub fn resolve(&self, headers: &[String]) -> ImportResult<ResolvedSchema> {
        let find = |aliases: &[String]| -> Option<String> {
            aliases.iter().find_map(|alias| {
                let wanted = normalize(alias);
                headers
                    .iter()
                    .find(|h| normalize(h) == wanted)
                    .map(|h| h.to_string())
            })
        };

        let opened_at = find(&self.opened_at).ok_or_else(|| {
            ImportError::MissingRequiredColumn {
                field: "opened_at".to_string(),
                tried: self.opened_at.clone(),
            }
        })?;

        Ok(ResolvedSchema {
            request_id: find(&self.request_id),
            development: find(&self.development),
            warranty_label: find(&self.warranty_label),
            constructive_system: find(&self.constructive_system),
            failure_type: find(&self.failure_type),
            opened_at,
            closed_at: find(&self.closed_at),
            commissioning_at: find(&self.commissioning_at),
        })
    }
}

/// Case- and whitespace-insensitive header form.
fn normalize(header: &str) -> String {
    header
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Concrete column names present in one sheet, resolved from a
/// `SchemaMapping`. Typed mapping reads cells only through this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSchema {
    pub request_id: Option<String>,
    pub development: Option<String>,
    pub warranty_label: Option<String>,
    pub constructive_system: Option<String>,
    pub failure_type: Option<String>,
    pub opened_at: String,
    pub closed_at: Option<String>,
    pub commissioning_at: Option<String>,
}
