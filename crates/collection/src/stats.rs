//! Numeric scans. Only numeric-coercible values take part; everything else
//! is skipped rather than treated as an error.

use crate::value::{Collection, Key, Value};

fn numbers<'a>(collection: &'a Collection, key: Option<&'a Key>) -> impl Iterator<Item = f64> + 'a {
    collection.values().filter_map(move |value| match key {
        Some(key) => value.get(key).and_then(Value::as_number),
        None => value.as_number(),
    })
}

/// Smallest numeric value, `None` when there is none.
pub fn min(collection: &Collection, key: Option<&Key>) -> Option<f64> {
    numbers(collection, key).fold(None, |acc, n| match acc {
        Some(current) if current <= n => Some(current),
        _ => Some(n),
    })
}

/// Largest numeric value, starting from `0.0`.
///
/// Returns `0.0` when there is no numeric value, and never returns a value
/// below zero. Unlike [`min`], an empty scan is not `None`.
pub fn max(collection: &Collection, key: Option<&Key>) -> f64 {
    numbers(collection, key).fold(0.0, |acc, n| if n > acc { n } else { acc })
}

pub fn sum(collection: &Collection) -> f64 {
    numbers(collection, None).sum()
}

/// Sum of numeric values divided by the number of entries (numeric or not).
pub fn avg(collection: &Collection) -> Option<f64> {
    if collection.is_empty() {
        return None;
    }
    Some(sum(collection) / collection.len() as f64)
}

/// Ascending numeric sort; non-numeric values count as zero. The result is
/// a sequence.
pub fn sort_numeric(collection: &Collection) -> Collection {
    let mut values: Vec<Value> = collection.values().cloned().collect();
    values.sort_by(|a, b| {
        a.as_number()
            .unwrap_or(0.0)
            .total_cmp(&b.as_number().unwrap_or(0.0))
    });
    Collection::from_values(values)
}
