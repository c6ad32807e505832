//! Pure aggregation primitives shared by every statistic.
//!
//! Nothing in this module performs I/O: the application services fetch and
//! resolve records, then hand plain labels and timestamps to these functions.
//!
//! - [`filters`] - status predicates applied before grouping
//! - [`category`] - counts, percentages and ranking
//! - [`time_bucket`] - lookback filtering and `YYYY-MM` bucketing

pub mod category;
pub mod filters;
pub mod time_bucket;

pub use category::{CategoryCount, aggregate_categories, percentage_of, round2};
pub use time_bucket::{
    DEFAULT_LOOKBACK_MONTHS, MonthlyBucket, aggregate_by_month, group_by_period, lookback_cutoff,
    period_key, start_of_month, start_of_year,
};
