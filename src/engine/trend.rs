use serde::{Deserialize, Serialize};

/// Percent-change magnitude separating a trend from noise.
const TREND_THRESHOLD_PCT: f64 = 5.0;

/// Direction of a numeric series, rendered as a badge downstream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn label(self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        }
    }
}

/// Classifies a series by comparing the mean of its first half against the
/// mean of its second half.
///
/// A coarse two-window comparison by intent, not a statistical trend test.
/// Fewer than two values is insufficient data and reads as stable. A zero
/// first-half mean substitutes 1 as the denominator base, so a series
/// starting at exactly zero yields a percent change equal to the raw
/// second-half magnitude.
pub fn classify(values: &[f64]) -> Trend {
    if values.len() < 2 {
        return Trend::Stable;
    }
    // Odd lengths put the extra element in the first half.
    let mid = (values.len() + 1) / 2;
    let first = mean(&values[..mid]);
    let second = mean(&values[mid..]);
    let base = if first == 0.0 { 1.0 } else { first.abs() };
    let pct_change = (second - first) / base * 100.0;
    if pct_change > TREND_THRESHOLD_PCT {
        Trend::Up
    } else if pct_change < -TREND_THRESHOLD_PCT {
        Trend::Down
    } else {
        Trend::Stable
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
