use serde::{Deserialize, Serialize};

use super::compare::ComparisonField;
use super::trend::{classify, Trend};
use crate::domain::MonthlyForecastRecord;
use crate::errors::Result;

/// Per-month figures derived locally beside the service's pre-aggregated
/// summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesStats {
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub trend: Trend,
}

/// Average, min, max, and trend of one field across a monthly sequence.
///
/// Empty input is a normal "insufficient data" case and yields `None`,
/// never an error.
pub fn field_stats(
    months: &[MonthlyForecastRecord],
    field: ComparisonField,
) -> Result<Option<SeriesStats>> {
    if months.is_empty() {
        return Ok(None);
    }
    let mut values = Vec::with_capacity(months.len());
    for record in months {
        values.push(field.value_of(&record.amounts()?));
    }
    let sum: f64 = values.iter().sum();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Ok(Some(SeriesStats {
        average: sum / values.len() as f64,
        min,
        max,
        trend: classify(&values),
    }))
}
