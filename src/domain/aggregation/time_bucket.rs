//! Month-keyed bucketing over a lookback window.
//!
//! Periods are `YYYY-MM` strings of the UTC timestamp, so ordering the keys
//! lexicographically orders them chronologically.
//!
//! The lookback window uses fixed 30-day months: `meses = 12` covers the last
//! 360 days, not twelve calendar months.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use super::category::{CategoryCount, aggregate_categories};

/// Length of one lookback month, in days.
pub const DAYS_PER_LOOKBACK_MONTH: i64 = 30;

/// Lookback window applied when a caller does not ask for one.
pub const DEFAULT_LOOKBACK_MONTHS: u32 = 12;

/// One month of a trend: how many records fell in it and how they split.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyBucket {
    pub period: String,
    pub total: u64,
    pub breakdown: Vec<CategoryCount>,
}

/// Earliest instant still inside a lookback window of `months` ending at `now`.
pub fn lookback_cutoff(now: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    now - Duration::days(DAYS_PER_LOOKBACK_MONTH * i64::from(months))
}

/// `YYYY-MM` period key of a timestamp.
pub fn period_key(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m").to_string()
}

/// Midnight UTC on the first day of the month containing `now`.
pub fn start_of_month(now: DateTime<Utc>) -> DateTime<Utc> {
    midnight_utc(NaiveDate::from_ymd_opt(now.year(), now.month(), 1), now)
}

/// Midnight UTC on January 1st of the year containing `now`.
pub fn start_of_year(now: DateTime<Utc>) -> DateTime<Utc> {
    midnight_utc(NaiveDate::from_ymd_opt(now.year(), 1, 1), now)
}

fn midnight_utc(date: Option<NaiveDate>, fallback: DateTime<Utc>) -> DateTime<Utc> {
    date.and_then(|d| d.and_hms_opt(0, 0, 0))
        .map_or(fallback, |naive| naive.and_utc())
}

/// Groups values by period, dropping those older than `cutoff`.
///
/// Values inside a period keep their input order.
pub fn group_by_period<I, T>(entries: I, cutoff: DateTime<Utc>) -> BTreeMap<String, Vec<T>>
where
    I: IntoIterator<Item = (DateTime<Utc>, T)>,
{
    let mut periods: BTreeMap<String, Vec<T>> = BTreeMap::new();

    for (timestamp, value) in entries {
        if timestamp < cutoff {
            continue;
        }
        periods.entry(period_key(timestamp)).or_default().push(value);
    }

    periods
}

/// Builds a monthly trend with a category breakdown per month.
///
/// Every entry inside the window counts toward its month's `total`; only
/// entries carrying a category contribute to `breakdown`, so a month can
/// report more records than its breakdown accounts for. Months come back in
/// ascending order and an empty window yields an empty list.
pub fn aggregate_by_month<I>(entries: I, lookback_months: u32, now: DateTime<Utc>) -> Vec<MonthlyBucket>
where
    I: IntoIterator<Item = (DateTime<Utc>, Option<String>)>,
{
    let cutoff = lookback_cutoff(now, lookback_months);

    group_by_period(entries, cutoff)
        .into_iter()
        .map(|(period, labels)| {
            let total = labels.len() as u64;
            let breakdown = aggregate_categories(labels.into_iter().flatten());
            MonthlyBucket {
                period,
                total,
                breakdown,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_period_key_format() {
        assert_eq!(period_key(at(2024, 1, 15)), "2024-01");
        assert_eq!(period_key(at(2023, 12, 31)), "2023-12");
    }

    #[test]
    fn test_lookback_uses_thirty_day_months() {
        let now = at(2024, 6, 1);
        assert_eq!(lookback_cutoff(now, 1), at(2024, 5, 2));
        assert_eq!(lookback_cutoff(now, 12), now - Duration::days(360));
    }

    #[test]
    fn test_month_and_year_starts() {
        let now = Utc.with_ymd_and_hms(2024, 6, 18, 13, 45, 10).unwrap();
        assert_eq!(start_of_month(now), at(2024, 6, 1));
        assert_eq!(start_of_year(now), at(2024, 1, 1));
    }

    #[test]
    fn test_single_entry_lands_in_its_month() {
        let now = at(2024, 6, 1);
        let entries = vec![(at(2024, 1, 15), Some("perro".to_string()))];

        let trend = aggregate_by_month(entries, 12, now);

        assert_eq!(trend.len(), 1);
        assert_eq!(trend[0].period, "2024-01");
        assert_eq!(trend[0].total, 1);
        assert_eq!(trend[0].breakdown[0].category, "perro");
        assert_eq!(trend[0].breakdown[0].percentage, 100.0);
    }

    #[test]
    fn test_entries_older_than_cutoff_are_dropped() {
        let now = at(2024, 6, 1);
        let entries = vec![
            (at(2024, 5, 1), Some("gato".to_string())),
            (at(2024, 5, 20), Some("perro".to_string())),
        ];

        let trend = aggregate_by_month(entries, 1, now);

        assert_eq!(trend.len(), 1);
        assert_eq!(trend[0].total, 1);
        assert_eq!(trend[0].breakdown[0].category, "perro");
    }

    #[test]
    fn test_entry_exactly_at_cutoff_is_kept() {
        let now = at(2024, 6, 1);
        let cutoff = lookback_cutoff(now, 2);
        let trend = aggregate_by_month(vec![(cutoff, None)], 2, now);
        assert_eq!(trend.len(), 1);
    }

    #[test]
    fn test_buckets_sorted_ascending_without_duplicates() {
        let now = at(2024, 6, 1);
        let entries = vec![
            (at(2024, 3, 5), Some("perro".to_string())),
            (at(2023, 12, 5), Some("gato".to_string())),
            (at(2024, 3, 20), Some("gato".to_string())),
            (at(2024, 1, 2), None),
        ];

        let trend = aggregate_by_month(entries, 12, now);
        let periods: Vec<&str> = trend.iter().map(|b| b.period.as_str()).collect();

        assert_eq!(periods, vec!["2023-12", "2024-01", "2024-03"]);
        assert_eq!(trend[2].total, 2);
    }

    #[test]
    fn test_unresolved_entries_count_in_total_only() {
        let now = at(2024, 6, 1);
        let entries = vec![
            (at(2024, 4, 1), Some("perro".to_string())),
            (at(2024, 4, 2), None),
            (at(2024, 4, 3), None),
        ];

        let trend = aggregate_by_month(entries, 12, now);

        assert_eq!(trend[0].total, 3);
        assert_eq!(trend[0].breakdown.len(), 1);
        assert_eq!(trend[0].breakdown[0].count, 1);
        assert_eq!(trend[0].breakdown[0].percentage, 100.0);
    }

    #[test]
    fn test_empty_window_yields_empty_list() {
        let now = at(2024, 6, 1);
        let entries = vec![(at(2020, 1, 1), Some("perro".to_string()))];
        assert!(aggregate_by_month(entries, 12, now).is_empty());
        assert!(aggregate_by_month(Vec::new(), 12, now).is_empty());
    }

    #[test]
    fn test_group_by_period_keeps_input_order() {
        let now = at(2024, 6, 1);
        let grouped = group_by_period(
            vec![(at(2024, 5, 3), 'a'), (at(2024, 5, 1), 'b'), (at(2024, 4, 9), 'c')],
            lookback_cutoff(now, 12),
        );

        assert_eq!(grouped["2024-05"], vec!['a', 'b']);
        assert_eq!(grouped["2024-04"], vec!['c']);
    }
}
