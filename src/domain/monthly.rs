use serde::{Deserialize, Serialize};

use super::common::parse_amount;
use crate::errors::Result;

/// One calendar month of projected cash flow, as returned by the
/// forecasting service.
///
/// Amounts arrive as decimal strings; go through
/// [`MonthlyForecastRecord::amounts`] before doing arithmetic on them.
/// `total_expenses` and the expense breakdown follow the source's
/// signed-negative convention.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlyForecastRecord {
    /// Year-month key, canonically `YYYY-MM`; some service versions send a
    /// full first-of-month date instead.
    pub month: String,
    pub opening_balance: String,
    pub closing_balance: String,
    pub net_change: String,
    pub total_income: String,
    pub total_expenses: String,
    pub fixed_income: String,
    pub installment_income: String,
    pub expected_income: String,
    pub one_time_income: String,
    pub fixed_expenses: String,
    pub installment_expenses: String,
    pub loan_payments: String,
    pub one_time_expenses: String,
}

impl MonthlyForecastRecord {
    /// The record key normalized to `YYYY-MM`.
    pub fn month_key(&self) -> &str {
        self.month.get(..7).unwrap_or(&self.month)
    }

    /// Parses every amount field, failing on the first malformed one with
    /// an error naming the field and this record's month.
    pub fn amounts(&self) -> Result<MonthlyAmounts> {
        let key = self.month_key();
        Ok(MonthlyAmounts {
            opening_balance: parse_amount("opening_balance", key, &self.opening_balance)?,
            closing_balance: parse_amount("closing_balance", key, &self.closing_balance)?,
            net_change: parse_amount("net_change", key, &self.net_change)?,
            total_income: parse_amount("total_income", key, &self.total_income)?,
            total_expenses: parse_amount("total_expenses", key, &self.total_expenses)?,
            fixed_income: parse_amount("fixed_income", key, &self.fixed_income)?,
            installment_income: parse_amount("installment_income", key, &self.installment_income)?,
            expected_income: parse_amount("expected_income", key, &self.expected_income)?,
            one_time_income: parse_amount("one_time_income", key, &self.one_time_income)?,
            fixed_expenses: parse_amount("fixed_expenses", key, &self.fixed_expenses)?,
            installment_expenses: parse_amount(
                "installment_expenses",
                key,
                &self.installment_expenses,
            )?,
            loan_payments: parse_amount("loan_payments", key, &self.loan_payments)?,
            one_time_expenses: parse_amount("one_time_expenses", key, &self.one_time_expenses)?,
        })
    }
}

/// Fully parsed numeric view of a [`MonthlyForecastRecord`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyAmounts {
    pub opening_balance: f64,
    pub closing_balance: f64,
    pub net_change: f64,
    pub total_income: f64,
    pub total_expenses: f64,
    pub fixed_income: f64,
    pub installment_income: f64,
    pub expected_income: f64,
    pub one_time_income: f64,
    pub fixed_expenses: f64,
    pub installment_expenses: f64,
    pub loan_payments: f64,
    pub one_time_expenses: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> MonthlyForecastRecord {
        MonthlyForecastRecord {
            month: "2025-01-01".into(),
            opening_balance: "1000".into(),
            closing_balance: "3000".into(),
            net_change: "2000".into(),
            total_income: "5000".into(),
            total_expenses: "-3000".into(),
            fixed_income: "4000".into(),
            installment_income: "0".into(),
            expected_income: "500".into(),
            one_time_income: "500".into(),
            fixed_expenses: "-2500".into(),
            installment_expenses: "0".into(),
            loan_payments: "-500".into(),
            one_time_expenses: "0".into(),
        }
    }

    #[test]
    fn month_key_truncates_full_dates() {
        assert_eq!(record().month_key(), "2025-01");
    }

    #[test]
    fn month_key_passes_short_keys_through() {
        let mut short = record();
        short.month = "2025".into();
        assert_eq!(short.month_key(), "2025");
    }

    #[test]
    fn amounts_parses_every_field() {
        let amounts = record().amounts().expect("valid record");
        assert_eq!(amounts.total_income, 5000.0);
        assert_eq!(amounts.total_expenses, -3000.0);
        assert_eq!(amounts.loan_payments, -500.0);
    }

    #[test]
    fn amounts_names_the_offending_field() {
        let mut broken = record();
        broken.expected_income = "n/a".into();
        let err = broken.amounts().expect_err("malformed amount");
        let message = format!("{err}");
        assert!(message.contains("expected_income"), "unexpected error: {message}");
        assert!(message.contains("2025-01"), "unexpected error: {message}");
    }
}
