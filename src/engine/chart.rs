use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{MonthlyForecastRecord, WeeklyForecastRecord};
use crate::errors::Result;
use crate::locale::LocaleConfig;

/// Chart-ready projection of one forecast month.
///
/// Expense figures are magnitudes regardless of the source's storage sign.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyChartPoint {
    /// Axis label, e.g. `Jan '25`.
    pub label: String,
    /// Normalized `YYYY-MM` key, kept for click-to-drill-down correlation.
    pub month: String,
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
    pub fixed_income: f64,
    pub installment_income: f64,
    pub expected_income: f64,
    pub one_time_income: f64,
    pub fixed_expenses: f64,
    pub installment_expenses: f64,
    pub loan_payments: f64,
    pub one_time_expenses: f64,
}

/// Projects monthly records into chart points, preserving input order.
pub fn project_monthly(
    months: &[MonthlyForecastRecord],
    locale: &LocaleConfig,
) -> Result<Vec<MonthlyChartPoint>> {
    months
        .iter()
        .map(|record| {
            let amounts = record.amounts()?;
            let key = record.month_key();
            Ok(MonthlyChartPoint {
                label: month_axis_label(key, locale),
                month: key.to_string(),
                income: amounts.total_income,
                expenses: amounts.total_expenses.abs(),
                balance: amounts.closing_balance,
                fixed_income: amounts.fixed_income,
                installment_income: amounts.installment_income,
                expected_income: amounts.expected_income,
                one_time_income: amounts.one_time_income,
                fixed_expenses: amounts.fixed_expenses.abs(),
                installment_expenses: amounts.installment_expenses.abs(),
                loan_payments: amounts.loan_payments.abs(),
                one_time_expenses: amounts.one_time_expenses.abs(),
            })
        })
        .collect()
}

/// Chart-ready projection of one forecast week.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyChartPoint {
    /// Axis label, e.g. `Jan 6`.
    pub label: String,
    pub week_start: String,
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

/// Projects weekly records into chart points.
///
/// A single week cannot chart a trend line, so fewer than two inputs
/// produce no points at all rather than a degenerate chart.
pub fn project_weekly(
    weeks: &[WeeklyForecastRecord],
    locale: &LocaleConfig,
) -> Result<Vec<WeeklyChartPoint>> {
    if weeks.len() < 2 {
        return Ok(Vec::new());
    }
    weeks
        .iter()
        .map(|record| {
            let amounts = record.amounts()?;
            Ok(WeeklyChartPoint {
                label: week_axis_label(&record.week_start, locale),
                week_start: record.week_start.clone(),
                income: amounts.income,
                expenses: amounts.expenses.abs(),
                balance: amounts.running_balance,
            })
        })
        .collect()
}

/// Formats a `YYYY-MM` key as a short axis label, echoing the key verbatim
/// when it does not parse as a calendar month.
fn month_axis_label(key: &str, locale: &LocaleConfig) -> String {
    NaiveDate::parse_from_str(&format!("{}-01", key), "%Y-%m-%d")
        .map(|date| locale.short_month_year(date))
        .unwrap_or_else(|_| key.to_string())
}

fn week_axis_label(start: &str, locale: &LocaleConfig) -> String {
    NaiveDate::parse_from_str(start, "%Y-%m-%d")
        .map(|date| locale.short_month_day(date))
        .unwrap_or_else(|_| start.to_string())
}
