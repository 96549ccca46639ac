//! normkit collection layer.
//!
//! Index-bounded mutation and inspection of collections that may be plain
//! sequences or keyed mappings.
//!
//! ## What we do
//!
//! - Insert/delete/slice by position with explicit bounds errors
//! - Numeric min/max/sum over mixed values (non-numeric entries are skipped)
//! - Stable, key-preserving natural sort by a field of each element
//! - Dedupe, shuffle, random pick, recursive empty-value filtering
//!
//! ## Pure function guarantee
//!
//! Every operation takes its input by reference and returns a new
//! [`Collection`]. Nothing is mutated in place, so a failed call leaves no
//! partial state behind.
//!
//! ## Invariants worth knowing
//!
//! - Insert accepts positions `0..=len`, delete accepts `0..len`
//! - Search returns `Option`, never a sentinel index
//! - `min` of nothing is `None`, `max` of nothing is `0.0`

mod error;
mod ops;
mod order;
mod search;
mod stats;
mod value;

pub use crate::error::CollectionError;
pub use crate::ops::{append, delete_at, insert_at, keys, merge, prepend, reverse, slice, values};
pub use crate::order::{
    natural_cmp, random_element, random_element_with, shuffle, shuffle_with, sort_by_key,
};
pub use crate::search::{dedupe, filter_recursive, find_index, is_associative};
pub use crate::stats::{avg, max, min, sort_numeric, sum};
pub use crate::value::{Collection, Key, Scalar, Value};

#[cfg(test)]
mod tests {
    use super::*;

    fn scores() -> Collection {
        let row = |name: &str, score: i64| {
            Value::Mapping(Collection::from_entries(vec![
                (Key::from("name"), Value::from(name)),
                (Key::from("score"), Value::from(score)),
            ]))
        };
        Collection::from_values(vec![row("bob", 7), row("Alice", 12), row("carol", 3)])
    }

    #[test]
    fn sort_then_scan_by_field() {
        let sorted = sort_by_key(&scores(), &Key::from("name"));
        let names: Vec<String> = sorted
            .values()
            .filter_map(|v| v.get(&Key::from("name")))
            .map(Value::to_text)
            .collect();
        assert_eq!(names, vec!["Alice", "bob", "carol"]);

        let key = Key::from("score");
        assert_eq!(max(&sorted, Some(&key)), 12.0);
        assert_eq!(min(&sorted, Some(&key)), Some(3.0));
    }

    #[test]
    fn append_at_any_length_succeeds() {
        for n in 0..5 {
            let c = Collection::from_values((0..n).map(Value::from));
            let out = insert_at(&c, c.len(), Value::from("tail")).expect("append position");
            assert_eq!(out.len(), c.len() + 1);
            assert_eq!(out.at(c.len()), Some(&Value::from("tail")));
        }
    }

    #[test]
    fn inputs_are_untouched() {
        let original = scores();
        let snapshot = original.clone();
        let _ = insert_at(&original, 1, Value::from("x"));
        let _ = delete_at(&original, 0);
        let _ = reverse(&original);
        assert_eq!(original, snapshot);
    }
}
