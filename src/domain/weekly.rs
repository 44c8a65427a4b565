use serde::{Deserialize, Serialize};

use super::common::parse_amount;
use crate::errors::Result;

/// One calendar week of projected cash flow.
///
/// Sequences are chronologically ordered and carry a cumulative
/// `running_balance`; `expenses` may be signed negative like the monthly
/// records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeeklyForecastRecord {
    pub week_start: String,
    pub week_end: String,
    pub income: String,
    pub expenses: String,
    pub running_balance: String,
    pub net_change: String,
}

impl WeeklyForecastRecord {
    /// Parses every amount field, naming the week by its start date on
    /// failure.
    pub fn amounts(&self) -> Result<WeeklyAmounts> {
        let key = &self.week_start;
        Ok(WeeklyAmounts {
            income: parse_amount("income", key, &self.income)?,
            expenses: parse_amount("expenses", key, &self.expenses)?,
            running_balance: parse_amount("running_balance", key, &self.running_balance)?,
            net_change: parse_amount("net_change", key, &self.net_change)?,
        })
    }
}

/// Fully parsed numeric view of a [`WeeklyForecastRecord`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklyAmounts {
    pub income: f64,
    pub expenses: f64,
    pub running_balance: f64,
    pub net_change: f64,
}
