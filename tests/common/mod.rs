#![allow(dead_code)]

use forecast_core::domain::{MonthlyForecastRecord, WeeklyForecastRecord};

/// Builds a monthly record with the given aggregates and zeroed breakdowns.
pub fn month_record(
    month: &str,
    total_income: &str,
    total_expenses: &str,
    opening_balance: &str,
    closing_balance: &str,
    net_change: &str,
) -> MonthlyForecastRecord {
    MonthlyForecastRecord {
        month: month.into(),
        opening_balance: opening_balance.into(),
        closing_balance: closing_balance.into(),
        net_change: net_change.into(),
        total_income: total_income.into(),
        total_expenses: total_expenses.into(),
        fixed_income: "0".into(),
        installment_income: "0".into(),
        expected_income: "0".into(),
        one_time_income: "0".into(),
        fixed_expenses: "0".into(),
        installment_expenses: "0".into(),
        loan_payments: "0".into(),
        one_time_expenses: "0".into(),
    }
}

/// Builds a flat monthly horizon: identical income and expenses each month,
/// balances chained from `opening`.
pub fn flat_horizon(
    start_opening: f64,
    income: f64,
    expenses_magnitude: f64,
    count: usize,
) -> Vec<MonthlyForecastRecord> {
    let net = income - expenses_magnitude;
    let mut opening = start_opening;
    (0..count)
        .map(|idx| {
            let closing = opening + net;
            let record = month_record(
                &format!("2025-{:02}", idx + 1),
                &format!("{}", income),
                &format!("{}", -expenses_magnitude),
                &format!("{}", opening),
                &format!("{}", closing),
                &format!("{}", net),
            );
            opening = closing;
            record
        })
        .collect()
}

pub fn week_record(
    week_start: &str,
    week_end: &str,
    income: &str,
    expenses: &str,
    running_balance: &str,
    net_change: &str,
) -> WeeklyForecastRecord {
    WeeklyForecastRecord {
        week_start: week_start.into(),
        week_end: week_end.into(),
        income: income.into(),
        expenses: expenses.into(),
        running_balance: running_balance.into(),
        net_change: net_change.into(),
    }
}
