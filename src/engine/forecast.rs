// ==========================================
// Warranty Analytics - Maintenance Forecast Engine
// ==========================================
// Responsibility: the rule-based baseline for the editable expense
// forecast table. Planned expense for a development in calendar year Y
// is construction_cost * 1.5% * factor(Y - delivery_year):
//   diff < 0  -> 0      (not delivered yet)
//   diff <= 1 -> 0.5    (warranty load peaks right after handover)
//   diff == 2 -> 0.2
//   diff 3..5 -> 0.1
//   diff > 5  -> 0      (out of warranty)
// ==========================================

use std::collections::BTreeMap;

use crate::domain::forecast::ForecastRow;
use crate::engine::error::{EngineError, EngineResult};

/// Share of construction cost provisioned for warranty maintenance.
const MAINTENANCE_RATE: f64 = 0.015;

/// One development's forecast inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastInput {
    pub development: String,
    pub delivery_year: i32,
    pub construction_cost: f64,
}

pub struct ForecastEngine;

impl ForecastEngine {
    pub fn new() -> Self {
        Self
    }

    /// Baseline forecast rows over the calendar years `from..=to`.
    pub fn baseline(
        &self,
        inputs: &[ForecastInput],
        from: i32,
        to: i32,
    ) -> EngineResult<Vec<ForecastRow>> {
        if from > to {
            return Err(EngineError::InvalidForecastHorizon { from, to });
        }

        let rows = inputs
            .iter()
            .map(|input| {
                let mut amounts = BTreeMap::new();
                for year in from..=to {
                    let factor = Self::factor(year - input.delivery_year);
                    amounts.insert(year, input.construction_cost * MAINTENANCE_RATE * factor);
                }
                ForecastRow {
                    development: input.development.clone(),
                    delivery_year: input.delivery_year,
                    amounts,
                }
            })
            .collect();

        Ok(rows)
    }

    fn factor(years_since_delivery: i32) -> f64 {
        match years_since_delivery {
            d if d < 0 => 0.0,
            0 | 1 => 0.5,
            2 => 0.2,
            3..=5 => 0.1,
            _ => 0.0,
        }
    }
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self::new()
    }
}
