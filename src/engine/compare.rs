use serde::{Deserialize, Serialize};

use crate::domain::{MonthlyAmounts, MonthlyForecastRecord};
use crate::errors::Result;

/// Percent-change magnitude above which a comparison row is highlighted.
const SIGNIFICANT_PCT: f64 = 15.0;

/// Monthly record fields the comparison view can diff.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonField {
    TotalIncome,
    TotalExpenses,
    NetChange,
    OpeningBalance,
    ClosingBalance,
    FixedIncome,
    InstallmentIncome,
    ExpectedIncome,
    OneTimeIncome,
    FixedExpenses,
    InstallmentExpenses,
    LoanPayments,
    OneTimeExpenses,
}

impl ComparisonField {
    /// Expense fields are stored signed, compared as magnitudes, and have
    /// their favorability inverted: spending less is the improvement.
    pub fn is_expense(self) -> bool {
        matches!(
            self,
            ComparisonField::TotalExpenses
                | ComparisonField::FixedExpenses
                | ComparisonField::InstallmentExpenses
                | ComparisonField::LoanPayments
                | ComparisonField::OneTimeExpenses
        )
    }

    /// Extracts this field's comparable value, as a magnitude for expense
    /// fields.
    pub fn value_of(self, amounts: &MonthlyAmounts) -> f64 {
        let raw = match self {
            ComparisonField::TotalIncome => amounts.total_income,
            ComparisonField::TotalExpenses => amounts.total_expenses,
            ComparisonField::NetChange => amounts.net_change,
            ComparisonField::OpeningBalance => amounts.opening_balance,
            ComparisonField::ClosingBalance => amounts.closing_balance,
            ComparisonField::FixedIncome => amounts.fixed_income,
            ComparisonField::InstallmentIncome => amounts.installment_income,
            ComparisonField::ExpectedIncome => amounts.expected_income,
            ComparisonField::OneTimeIncome => amounts.one_time_income,
            ComparisonField::FixedExpenses => amounts.fixed_expenses,
            ComparisonField::InstallmentExpenses => amounts.installment_expenses,
            ComparisonField::LoanPayments => amounts.loan_payments,
            ComparisonField::OneTimeExpenses => amounts.one_time_expenses,
        };
        if self.is_expense() {
            raw.abs()
        } else {
            raw
        }
    }
}

/// One row of the two-month comparison table, month `a` as the baseline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonRow {
    pub field: ComparisonField,
    pub value_a: f64,
    pub value_b: f64,
    pub diff: f64,
    pub pct_change: f64,
    /// Highlight hint only, not a business rule.
    pub significant: bool,
    /// Whether the change reads as an improvement; inverted for expense
    /// fields, where a falling magnitude is the good direction.
    pub favorable: bool,
}

/// Compares one field across two monthly records.
pub fn compare_months(
    a: &MonthlyForecastRecord,
    b: &MonthlyForecastRecord,
    field: ComparisonField,
) -> Result<ComparisonRow> {
    let value_a = field.value_of(&a.amounts()?);
    let value_b = field.value_of(&b.amounts()?);
    let diff = value_b - value_a;
    let pct_change = if value_a != 0.0 {
        diff / value_a.abs() * 100.0
    } else if value_b != 0.0 {
        // Appeared from nothing: call it a full increase.
        100.0
    } else {
        0.0
    };
    let favorable = if field.is_expense() {
        diff < 0.0
    } else {
        diff > 0.0
    };
    Ok(ComparisonRow {
        field,
        value_a,
        value_b,
        diff,
        pct_change,
        significant: pct_change.abs() > SIGNIFICANT_PCT,
        favorable,
    })
}
