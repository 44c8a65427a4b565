#![doc(test(attr(deny(warnings))))]

//! Forecast Core provides the pure what-if adjustment and derived-metrics
//! primitives behind a personal-finance forecasting dashboard: scenario
//! application over monthly projections, chart data shaping, trend
//! classification, and month-to-month comparisons.

pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod locale;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Forecast Core tracing initialized.");
    });
}
