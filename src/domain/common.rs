use crate::errors::{ForecastError, Result};

/// Strictly parses a decimal-string amount.
///
/// Non-finite values are rejected along with malformed text so a literal
/// `"NaN"` in a service payload cannot poison downstream arithmetic.
pub(crate) fn parse_amount(field: &str, record: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ForecastError::ParseAmount {
            field: field.into(),
            record: record.into(),
            value: raw.into(),
        })
}

/// Re-encodes an adjusted amount in the service's decimal-string
/// convention: whole amounts bare, anything else rounded to cents.
pub(crate) fn format_amount(value: f64) -> String {
    let cents = (value * 100.0).round() / 100.0;
    if cents == cents.trunc() {
        format!("{}", cents as i64)
    } else {
        format!("{:.2}", cents)
    }
}
