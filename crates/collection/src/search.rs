//! Lookup and cleanup: find, dedupe, recursive empty filtering, shape test.

use std::collections::HashSet;

use crate::value::{Collection, Key, Value};

/// Key of the first entry loosely equal to `needle`.
///
/// With `case_insensitive`, a scalar also matches when its lowercased text
/// equals the needle's, so it never finds less than the case-sensitive form.
pub fn find_index(collection: &Collection, needle: &Value, case_insensitive: bool) -> Option<Key> {
    let folded_needle = case_insensitive.then(|| needle.to_text().to_lowercase());
    collection
        .iter()
        .find(|(_, value)| {
            value.loose_eq(needle)
                || match (&folded_needle, value) {
                    (Some(folded), Value::Scalar(_)) => value.to_text().to_lowercase() == *folded,
                    _ => false,
                }
        })
        .map(|(key, _)| key.clone())
}

/// Drops repeated values, keeping the first occurrence and its key.
///
/// Scalars are duplicates when their text forms match (`1` and `"1"`);
/// nested values when they are structurally equal.
pub fn dedupe(collection: &Collection) -> Collection {
    let mut seen_text: HashSet<String> = HashSet::new();
    let mut seen_nested: Vec<&Value> = Vec::new();

    let kept = collection.iter().filter(|(_, value)| match value {
        Value::Scalar(scalar) => seen_text.insert(scalar.to_text()),
        nested => {
            if seen_nested.contains(nested) {
                false
            } else {
                seen_nested.push(*nested);
                true
            }
        }
    });
    Collection::from_entries(
        kept.map(|(k, v)| (k.clone(), v.clone()))
            .collect::<Vec<_>>(),
    )
}

/// Removes empty values at every depth.
///
/// Nested collections are cleaned first, so a child that only held empty
/// values becomes empty itself and is then dropped by its parent. Keys of
/// surviving entries are kept.
pub fn filter_recursive(collection: &Collection) -> Collection {
    Collection::from_entries(
        collection
            .iter()
            .filter_map(|(key, value)| {
                let cleaned = clean_value(value);
                cleaned.is_truthy().then(|| (key.clone(), cleaned))
            })
            .collect::<Vec<_>>(),
    )
}

fn clean_value(value: &Value) -> Value {
    match value {
        Value::Sequence(items) => Value::Sequence(
            items
                .iter()
                .map(clean_value)
                .filter(Value::is_truthy)
                .collect(),
        ),
        Value::Mapping(map) => Value::Mapping(filter_recursive(map)),
        scalar => scalar.clone(),
    }
}

/// True unless the keys are exactly `0..len` in order.
pub fn is_associative(collection: &Collection) -> bool {
    !collection.is_sequence()
}
