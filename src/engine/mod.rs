pub mod chart;
pub mod compare;
pub mod stats;
pub mod trend;
pub mod whatif;

pub use chart::{project_monthly, project_weekly, MonthlyChartPoint, WeeklyChartPoint};
pub use compare::{compare_months, ComparisonField, ComparisonRow};
pub use stats::{field_stats, SeriesStats};
pub use trend::{classify, Trend};
pub use whatif::apply_what_if;
