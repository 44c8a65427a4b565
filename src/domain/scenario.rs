use serde::{Deserialize, Serialize};

/// A hypothetical adjustment layered over a monthly forecast.
///
/// Held as in-memory view state for a single session, never persisted.
/// The zero default is the no-op scenario.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WhatIfScenario {
    /// Recurring amount added to every month's income.
    pub added_income: f64,
    /// Recurring amount added to every month's expenses.
    pub added_expense: f64,
    /// One-time signed adjustment applied to the starting balance.
    pub balance_adjustment: f64,
}

impl WhatIfScenario {
    pub fn new(added_income: f64, added_expense: f64, balance_adjustment: f64) -> Self {
        Self {
            added_income,
            added_expense,
            balance_adjustment,
        }
    }

    /// A scenario is active iff at least one field is non-zero.
    pub fn is_active(&self) -> bool {
        self.added_income != 0.0 || self.added_expense != 0.0 || self.balance_adjustment != 0.0
    }

    /// Net recurring monthly effect.
    pub fn added_net(&self) -> f64 {
        self.added_income - self.added_expense
    }

    /// Returns the scenario to its no-op defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
