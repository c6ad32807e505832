//! Category counting with percentages and a stable ranking.

use std::collections::HashMap;

/// One entry of a ranked category breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
    pub percentage: f64,
}

/// Rounds to two decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Share of `part` in `total` as a percentage rounded to two decimals.
///
/// Returns `0.0` when `total` is zero.
pub fn percentage_of(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(part as f64 / total as f64 * 100.0)
}

/// Counts each distinct label and ranks the result.
///
/// Entries are ordered by count descending; equal counts keep the order in
/// which their label first appeared. Percentages are relative to the number
/// of labels given. An empty input produces an empty breakdown.
pub fn aggregate_categories<I, S>(labels: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut tallies: Vec<(String, u64)> = Vec::new();

    for label in labels {
        let label = label.as_ref();
        match index.get(label) {
            Some(&slot) => tallies[slot].1 += 1,
            None => {
                index.insert(label.to_string(), tallies.len());
                tallies.push((label.to_string(), 1));
            }
        }
    }

    let total: u64 = tallies.iter().map(|(_, count)| count).sum();

    // sort_by is stable, so first-seen order survives among ties
    tallies.sort_by(|a, b| b.1.cmp(&a.1));

    tallies
        .into_iter()
        .map(|(category, count)| CategoryCount {
            percentage: percentage_of(count, total),
            category,
            count,
        })
        .collect()
}
