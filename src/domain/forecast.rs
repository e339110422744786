// ==========================================
// Warranty Analytics - Maintenance Forecast Document
// ==========================================
// The user-editable expense forecast table. Persisted as an explicit
// document keyed by plan_id (see repository::ForecastPlanRepository),
// replacing ad-hoc session state.
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One development's forecast line: planned maintenance expense per
/// calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    pub development: String,
    /// Year the development was handed over.
    pub delivery_year: i32,
    /// Calendar year -> planned expense (currency units).
    pub amounts: BTreeMap<i32, f64>,
}

/// The editable forecast table as a persisted document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPlan {
    pub plan_id: String,
    pub rows: Vec<ForecastRow>,
    pub updated_at: NaiveDateTime,
    pub updated_by: Option<String>,
}

impl ForecastPlan {
    /// Sum of planned expense per year across all rows, for the annual
    /// planned-vs-real comparison chart.
    pub fn totals_by_year(&self) -> BTreeMap<i32, f64> {
        let mut totals: BTreeMap<i32, f64> = BTreeMap::new();
        for row in &self.rows {
            for (year, amount) in &row.amounts {
                *totals.entry(*year).or_insert(0.0) += amount;
            }
        }
        totals
    }
}
