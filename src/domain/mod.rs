pub(crate) mod common;
pub mod horizon;
pub mod monthly;
pub mod response;
pub mod scenario;
pub mod weekly;

pub use horizon::ForecastHorizon;
pub use monthly::{MonthlyAmounts, MonthlyForecastRecord};
pub use response::{ForecastSummary, MonthlyForecastResponse, WeeklyForecastResponse};
pub use scenario::WhatIfScenario;
pub use weekly::{WeeklyAmounts, WeeklyForecastRecord};
