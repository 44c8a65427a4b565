use serde::{Deserialize, Serialize};

use super::{MonthlyForecastRecord, WeeklyForecastRecord};
use crate::errors::Result;

/// Monthly horizon payload from the forecasting service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyForecastResponse {
    pub months: Vec<MonthlyForecastRecord>,
    pub has_negative_months: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_negative_month: Option<String>,
}

impl MonthlyForecastResponse {
    /// Parses every record once at the ingestion boundary so a malformed
    /// amount fails fast instead of poisoning every derived value.
    pub fn validate(&self) -> Result<()> {
        for record in &self.months {
            record.amounts()?;
        }
        Ok(())
    }
}

/// Weekly horizon payload from the forecasting service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyForecastResponse {
    pub weeks: Vec<WeeklyForecastRecord>,
}

impl WeeklyForecastResponse {
    pub fn validate(&self) -> Result<()> {
        for record in &self.weeks {
            record.amounts()?;
        }
        Ok(())
    }
}

/// Pre-aggregated figures computed by the service for the summary view.
///
/// Consumed as-is; the engine never recomputes these. The per-field
/// average/min/max/trend shown next to them comes from
/// [`crate::engine::stats::field_stats`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub total_expected_income: String,
    pub total_expected_expenses: String,
    pub net_projected: String,
    pub end_balance: String,
    pub current_balance: String,
    pub forecast_months: u32,
    pub alerts_count: u32,
    pub has_negative_months: bool,
}
