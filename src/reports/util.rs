//! Shared aggregation helpers for the reporters.

use std::collections::HashMap;
use std::hash::Hash;

/// Most frequent key with its occurrence count; ties break to the key
/// seen first in record order. Returns `None` for empty input.
pub fn mode<T, K, F>(items: &[T], key: F) -> Option<(K, usize)>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut counts: HashMap<K, usize> = HashMap::new();
    for item in items {
        *counts.entry(key(item)).or_insert(0) += 1;
    }
    let best = *counts.values().max()?;
    items
        .iter()
        .map(|item| key(item))
        .find(|k| counts[k] == best)
        .map(|k| (k, best))
}

/// Occurrence counts per key, descending by count; equal counts keep
/// first-encountered order.
pub fn value_counts<T, K, F>(items: &[T], key: F) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut counts: HashMap<K, usize> = HashMap::new();
    let mut order: Vec<K> = Vec::new();
    for item in items {
        let k = key(item);
        if !counts.contains_key(&k) {
            order.push(k.clone());
        }
        *counts.entry(k).or_insert(0) += 1;
    }
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order
        .into_iter()
        .map(|k| {
            let count = counts[&k];
            (k, count)
        })
        .collect()
}

/// Renders a count of seconds as `[N days ]HH:MM:SS[.mmm]`.
///
/// The days part is omitted when zero; fractional seconds show to
/// millisecond precision only when present (mean durations).
pub fn format_duration(seconds: f64) -> String {
    let total_millis = (seconds.max(0.0) * 1000.0).round() as i64;
    let whole = total_millis / 1000;
    let millis = total_millis % 1000;

    let days = whole / 86_400;
    let hours = (whole % 86_400) / 3_600;
    let minutes = (whole % 3_600) / 60;
    let secs = whole % 60;

    let mut out = String::new();
    if days == 1 {
        out.push_str("1 day ");
    } else if days > 1 {
        out.push_str(&format!("{days} days "));
    }
    out.push_str(&format!("{hours:02}:{minutes:02}:{secs:02}"));
    if millis > 0 {
        out.push_str(&format!(".{millis:03}"));
    }
    out
}
