// ==========================================
// Warranty Analytics - Forecast Plan Repository
// ==========================================
// Persists the user-editable forecast table as an explicit document
// keyed by plan_id. Conflict policy: last-write-wins upsert — the
// department edits one plan at a time and the latest save is
// authoritative. Replaces the former implicit session state.
// ==========================================

use chrono::{NaiveDateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::forecast::ForecastPlan;
use crate::repository::error::{RepositoryError, RepositoryResult};

pub struct ForecastPlanRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ForecastPlanRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        let repo = Self { conn };
        // best-effort: a missing table surfaces on first use, not at startup
        if let Err(e) = repo.ensure_table() {
            tracing::warn!("forecast_plan ensure failed: {}", e);
        }
        repo
    }

    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn ensure_table(&self) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS forecast_plan (
              plan_id      TEXT PRIMARY KEY,
              payload_json TEXT NOT NULL,
              updated_at   TEXT NOT NULL,
              updated_by   TEXT
            );
            "#,
        )?;
        Ok(())
    }

    /// Save a plan. Last-write-wins: an existing document with the same
    /// plan_id is replaced wholesale and its timestamp refreshed.
    pub fn save(&self, plan: &ForecastPlan) -> RepositoryResult<NaiveDateTime> {
        let updated_at = Utc::now().naive_utc();
        let stored = ForecastPlan {
            updated_at,
            ..plan.clone()
        };
        let payload = serde_json::to_string(&stored)?;

        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO forecast_plan (plan_id, payload_json, updated_at, updated_by)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(plan_id) DO UPDATE SET
              payload_json = excluded.payload_json,
              updated_at   = excluded.updated_at,
              updated_by   = excluded.updated_by
            "#,
            params![
                stored.plan_id,
                payload,
                updated_at.format("%Y-%m-%d %H:%M:%S%.f").to_string(),
                stored.updated_by,
            ],
        )?;

        tracing::debug!(plan_id = %stored.plan_id, "forecast plan saved");
        Ok(updated_at)
    }

    pub fn load(&self, plan_id: &str) -> RepositoryResult<ForecastPlan> {
        let conn = self.get_conn()?;
        let payload: Option<String> = conn
            .query_row(
                "SELECT payload_json FROM forecast_plan WHERE plan_id = ?1",
                params![plan_id],
                |row| row.get(0),
            )
            .optional()?;

        let payload = payload.ok_or_else(|| RepositoryError::NotFound {
            entity: "ForecastPlan".to_string(),
            id: plan_id.to_string(),
        })?;

        Ok(serde_json::from_str(&payload)?)
    }

    pub fn delete(&self, plan_id: &str) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            "DELETE FROM forecast_plan WHERE plan_id = ?1",
            params![plan_id],
        )?;
        Ok(affected > 0)
    }

    pub fn list_plan_ids(&self) -> RepositoryResult<Vec<String>> {
        let conn = self.get_conn()?;
        let mut stmt =
            conn.prepare("SELECT plan_id FROM forecast_plan ORDER BY plan_id")?;
        let ids = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ids)
    }
}
