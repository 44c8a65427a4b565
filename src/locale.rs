use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Locale preferences carried alongside chart output.
///
/// The engine only produces short axis labels; full currency and number
/// formatting stays with the rendering layer, which receives the tag here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
        }
    }
}

impl LocaleConfig {
    pub fn new(language_tag: impl Into<String>) -> Self {
        Self {
            language_tag: language_tag.into(),
        }
    }

    /// Axis label for a monthly data point, e.g. `Jan '25`.
    pub fn short_month_year(&self, date: NaiveDate) -> String {
        format!("{} '{:02}", month_label(date.month()), date.year() % 100)
    }

    /// Axis label for a weekly data point, e.g. `Jan 6`.
    pub fn short_month_day(&self, date: NaiveDate) -> String {
        format!("{} {}", month_label(date.month()), date.day())
    }
}

fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_year_label_uses_two_digit_year() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(LocaleConfig::default().short_month_year(date), "Jan '25");
    }

    #[test]
    fn month_day_label_drops_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 6).unwrap();
        assert_eq!(LocaleConfig::default().short_month_day(date), "Mar 6");
    }
}
