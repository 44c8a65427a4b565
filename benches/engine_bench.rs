use criterion::{black_box, criterion_group, criterion_main, Criterion};
use forecast_core::domain::{MonthlyForecastRecord, WhatIfScenario};
use forecast_core::engine::{apply_what_if, classify, project_monthly};
use forecast_core::locale::LocaleConfig;

fn build_horizon(count: usize) -> Vec<MonthlyForecastRecord> {
    let mut opening = 1000.0;
    (0..count)
        .map(|idx| {
            let income = 5000.0 + (idx % 7) as f64 * 110.0;
            let expenses = 3000.0 + (idx % 5) as f64 * 90.0;
            let net = income - expenses;
            let closing = opening + net;
            let record = MonthlyForecastRecord {
                month: format!("2025-{:02}", (idx % 12) + 1),
                opening_balance: format!("{}", opening),
                closing_balance: format!("{}", closing),
                net_change: format!("{}", net),
                total_income: format!("{}", income),
                total_expenses: format!("{}", -expenses),
                fixed_income: format!("{}", income - 500.0),
                installment_income: "0".into(),
                expected_income: "250".into(),
                one_time_income: "250".into(),
                fixed_expenses: format!("{}", -(expenses - 500.0)),
                installment_expenses: "0".into(),
                loan_payments: "-500".into(),
                one_time_expenses: "0".into(),
            };
            opening = closing;
            record
        })
        .collect()
}

fn bench_apply_what_if(c: &mut Criterion) {
    let months = build_horizon(12);
    let scenario = WhatIfScenario::new(500.0, 200.0, -1000.0);
    c.bench_function("apply_what_if_12_months", |b| {
        b.iter(|| apply_what_if(black_box(&months), black_box(&scenario)).unwrap())
    });
}

fn bench_project_monthly(c: &mut Criterion) {
    let months = build_horizon(12);
    let locale = LocaleConfig::default();
    c.bench_function("project_monthly_12_months", |b| {
        b.iter(|| project_monthly(black_box(&months), black_box(&locale)).unwrap())
    });
}

fn bench_classify(c: &mut Criterion) {
    let values: Vec<f64> = (0..24).map(|idx| 4000.0 + idx as f64 * 35.0).collect();
    c.bench_function("classify_24_values", |b| {
        b.iter(|| classify(black_box(&values)))
    });
}

criterion_group!(
    benches,
    bench_apply_what_if,
    bench_project_monthly,
    bench_classify
);
criterion_main!(benches);
