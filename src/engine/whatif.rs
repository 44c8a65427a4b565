use std::borrow::Cow;

use crate::domain::common::format_amount;
use crate::domain::{MonthlyForecastRecord, WhatIfScenario};
use crate::errors::Result;

/// Applies a what-if scenario to a chronologically ordered monthly
/// sequence, producing adjusted records with consistent running balances.
///
/// An inactive scenario returns the input slice borrowed and unchanged, so
/// callers can memoize on identity. Otherwise every month is re-emitted
/// with adjusted aggregate totals and balances. The income/expense
/// breakdown components pass through untouched: the scenario models an
/// unclassified hypothetical, so stacked breakdown charts will not sum to
/// the adjusted totals while one is active.
pub fn apply_what_if<'a>(
    months: &'a [MonthlyForecastRecord],
    scenario: &WhatIfScenario,
) -> Result<Cow<'a, [MonthlyForecastRecord]>> {
    if !scenario.is_active() {
        return Ok(Cow::Borrowed(months));
    }
    tracing::debug!(
        added_income = scenario.added_income,
        added_expense = scenario.added_expense,
        balance_adjustment = scenario.balance_adjustment,
        months = months.len(),
        "applying what-if scenario"
    );
    let added_net = scenario.added_net();
    let adjusted = months
        .iter()
        .scan(scenario.balance_adjustment, |running, record| {
            *running += added_net;
            Some(adjust_record(record, scenario, added_net, *running))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Cow::Owned(adjusted))
}

fn adjust_record(
    record: &MonthlyForecastRecord,
    scenario: &WhatIfScenario,
    added_net: f64,
    running: f64,
) -> Result<MonthlyForecastRecord> {
    let amounts = record.amounts()?;
    Ok(MonthlyForecastRecord {
        // The opening balance carries the accumulated adjustment from
        // before this month's own recurring effect lands.
        opening_balance: format_amount(amounts.opening_balance + running - added_net),
        closing_balance: format_amount(amounts.closing_balance + running),
        net_change: format_amount(amounts.net_change + added_net),
        total_income: format_amount(amounts.total_income + scenario.added_income),
        // Subtracting keeps the signed-negative expense convention.
        total_expenses: format_amount(amounts.total_expenses - scenario.added_expense),
        ..record.clone()
    })
}
