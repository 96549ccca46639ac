//! Positional mutation: insert, delete, slice, reverse, merge.
//!
//! Every function returns a new [`Collection`]; inputs are never modified.
//! Positions are zero-based offsets into the entry order, independent of the
//! entries' keys.

use tracing::debug;

use crate::error::CollectionError;
use crate::value::{Collection, Key, Value};

/// Inserts `value` before position `index`.
///
/// `index == len` appends. A [`Value::Sequence`] is spliced element by
/// element and a [`Value::Mapping`] entry by entry. Integer keys of the
/// result are renumbered from zero, name keys are kept.
pub fn insert_at(
    collection: &Collection,
    index: usize,
    value: Value,
) -> Result<Collection, CollectionError> {
    let len = collection.len();
    if index > len {
        debug!(index, len, "insert_at_out_of_range");
        return Err(CollectionError::Index { index, len });
    }

    let (head, tail) = collection.entries().split_at(index);
    Ok(Collection::renumbered(
        head.iter()
            .cloned()
            .chain(spliced(value))
            .chain(tail.iter().cloned()),
    ))
}

fn spliced(value: Value) -> Vec<(Key, Value)> {
    match value {
        Value::Sequence(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, v)| (Key::Index(i as i64), v))
            .collect(),
        Value::Mapping(map) => map.into_entries(),
        scalar => vec![(Key::Index(0), scalar)],
    }
}

/// Removes the entry at position `index`.
///
/// Valid positions are `0..len`. A sequence stays a sequence (keys are
/// renumbered); an associative collection keeps its remaining keys.
pub fn delete_at(collection: &Collection, index: usize) -> Result<Collection, CollectionError> {
    let len = collection.len();
    if index >= len {
        debug!(index, len, "delete_at_out_of_range");
        return Err(CollectionError::Index { index, len });
    }

    let remaining = collection
        .entries()
        .iter()
        .enumerate()
        .filter(|(pos, _)| *pos != index)
        .map(|(_, entry)| entry.clone());

    if collection.is_sequence() {
        Ok(Collection::renumbered(remaining))
    } else {
        Ok(Collection::from_entries(remaining))
    }
}

/// Appends a single value under the next free integer key.
pub fn append(collection: &Collection, value: Value) -> Collection {
    let mut out = collection.clone();
    out.push(value);
    out
}

/// Inserts at position zero; never out of range.
pub fn prepend(collection: &Collection, value: Value) -> Collection {
    Collection::renumbered(
        spliced(value)
            .into_iter()
            .chain(collection.entries().iter().cloned()),
    )
}

/// Concatenates two collections. Name keys of `right` overwrite those of
/// `left` in place; integer keys are renumbered.
pub fn merge(left: &Collection, right: &Collection) -> Collection {
    Collection::renumbered(
        left.entries()
            .iter()
            .cloned()
            .chain(right.entries().iter().cloned()),
    )
}

/// Portion of a collection.
///
/// A negative `start` counts from the end. `length` of `None` runs to the
/// end; a negative length stops that many entries before the end.
pub fn slice(collection: &Collection, start: isize, length: Option<isize>) -> Collection {
    let len = collection.len() as isize;
    let begin = if start < 0 {
        (len + start).max(0)
    } else {
        start.min(len)
    };
    let end = match length {
        None => len,
        Some(l) if l < 0 => len + l,
        Some(l) => begin.saturating_add(l).min(len),
    };
    if end <= begin {
        return Collection::new();
    }

    Collection::renumbered(
        collection.entries()[begin as usize..end as usize]
            .iter()
            .cloned(),
    )
}

/// Reverses entry order; integer keys are renumbered, name keys kept.
pub fn reverse(collection: &Collection) -> Collection {
    Collection::renumbered(collection.entries().iter().rev().cloned())
}

/// All values as a fresh sequence, dropping keys.
pub fn values(collection: &Collection) -> Collection {
    Collection::from_values(collection.values().cloned())
}

/// All keys in order.
pub fn keys(collection: &Collection) -> Vec<Key> {
    collection.keys().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(items: &[&str]) -> Collection {
        Collection::from_values(items.iter().copied().map(Value::from))
    }

    #[test]
    fn insert_in_middle_shifts_tail() {
        let out = insert_at(&seq(&["a", "c"]), 1, Value::from("b")).unwrap();
        assert_eq!(out, seq(&["a", "b", "c"]));
    }

    #[test]
    fn insert_at_len_appends() {
        let out = insert_at(&seq(&["a"]), 1, Value::from("b")).unwrap();
        assert_eq!(out, seq(&["a", "b"]));
        let out = insert_at(&Collection::new(), 0, Value::from("x")).unwrap();
        assert_eq!(out, seq(&["x"]));
    }

    #[test]
    fn insert_past_len_fails() {
        let err = insert_at(&seq(&["a"]), 2, Value::from("b")).unwrap_err();
        assert_eq!(err, CollectionError::Index { index: 2, len: 1 });
    }

    #[test]
    fn insert_splices_sequences() {
        let value = Value::Sequence(vec![Value::from("x"), Value::from("y")]);
        let out = insert_at(&seq(&["a", "b"]), 1, value).unwrap();
        assert_eq!(out, seq(&["a", "x", "y", "b"]));
    }

    #[test]
    fn insert_keeps_name_keys() {
        let assoc = Collection::from_entries(vec![
            (Key::from("first"), Value::from(1)),
            (Key::Index(7), Value::from(2)),
        ]);
        let out = insert_at(&assoc, 1, Value::from(9)).unwrap();
        let keys = keys(&out);
        assert_eq!(keys, vec![Key::from("first"), Key::Index(0), Key::Index(1)]);
    }

    #[test]
    fn delete_removes_and_reindexes_sequences() {
        let out = delete_at(&seq(&["a", "b", "c"]), 1).unwrap();
        assert_eq!(out, seq(&["a", "c"]));
    }

    #[test]
    fn delete_at_len_is_rejected() {
        let err = delete_at(&seq(&["a", "b"]), 2).unwrap_err();
        assert_eq!(err, CollectionError::Index { index: 2, len: 2 });
    }

    #[test]
    fn delete_keeps_associative_keys() {
        let assoc = Collection::from_entries(vec![
            (Key::from("a"), Value::from(1)),
            (Key::from("b"), Value::from(2)),
        ]);
        let out = delete_at(&assoc, 0).unwrap();
        assert_eq!(keys(&out), vec![Key::from("b")]);
    }

    #[test]
    fn delete_undoes_insert() {
        let original = seq(&["a", "b", "c"]);
        for i in 0..=original.len() {
            let inserted = insert_at(&original, i, Value::from("z")).unwrap();
            assert_eq!(delete_at(&inserted, i).unwrap(), original);
        }
    }

    #[test]
    fn slice_follows_offsets_and_lengths() {
        let s = seq(&["a", "b", "c", "d"]);
        assert_eq!(slice(&s, 1, Some(2)), seq(&["b", "c"]));
        assert_eq!(slice(&s, -2, None), seq(&["c", "d"]));
        assert_eq!(slice(&s, 0, Some(-1)), seq(&["a", "b", "c"]));
        assert_eq!(slice(&s, 10, Some(2)), Collection::new());
        assert_eq!(slice(&s, 2, Some(-3)), Collection::new());
    }

    #[test]
    fn reverse_and_prepend() {
        assert_eq!(reverse(&seq(&["a", "b"])), seq(&["b", "a"]));
        assert_eq!(prepend(&seq(&["b"]), Value::from("a")), seq(&["a", "b"]));
    }

    #[test]
    fn merge_overwrites_names() {
        let left = Collection::from_entries(vec![(Key::from("k"), Value::from(1))]);
        let right = Collection::from_entries(vec![
            (Key::from("k"), Value::from(2)),
            (Key::Index(4), Value::from(3)),
        ]);
        let out = merge(&left, &right);
        assert_eq!(out.get(&Key::from("k")), Some(&Value::from(2)));
        assert_eq!(out.get(&Key::Index(0)), Some(&Value::from(3)));
    }
}
