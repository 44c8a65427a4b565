use serde::{Deserialize, Serialize};

use crate::errors::ForecastError;

/// Monthly horizons supported by the forecasting service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ForecastHorizon {
    OneMonth,
    ThreeMonths,
    SixMonths,
    TwelveMonths,
}

impl ForecastHorizon {
    /// The integer month count used as the service request parameter.
    pub fn months(self) -> u32 {
        match self {
            ForecastHorizon::OneMonth => 1,
            ForecastHorizon::ThreeMonths => 3,
            ForecastHorizon::SixMonths => 6,
            ForecastHorizon::TwelveMonths => 12,
        }
    }
}

impl Default for ForecastHorizon {
    fn default() -> Self {
        ForecastHorizon::ThreeMonths
    }
}

impl TryFrom<u32> for ForecastHorizon {
    type Error = ForecastError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ForecastHorizon::OneMonth),
            3 => Ok(ForecastHorizon::ThreeMonths),
            6 => Ok(ForecastHorizon::SixMonths),
            12 => Ok(ForecastHorizon::TwelveMonths),
            other => Err(ForecastError::InvalidInput(format!(
                "unsupported forecast horizon: {} months",
                other
            ))),
        }
    }
}
