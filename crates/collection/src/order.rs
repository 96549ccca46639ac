//! Reordering: natural sort by field, shuffle, random pick.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::CollectionError;
use crate::value::{Collection, Key, Value};

/// Case-insensitive natural order: digit runs compare by numeric value, so
/// `"img2" < "img10"`.
pub fn natural_cmp(left: &str, right: &str) -> Ordering {
    let left = left.to_lowercase();
    let right = right.to_lowercase();
    let mut a = left.chars().peekable();
    let mut b = right.chars().peekable();

    loop {
        match (a.peek().copied(), b.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let run_a = take_digits(&mut a);
                let run_b = take_digits(&mut b);
                let ord = compare_digit_runs(&run_a, &run_b);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                if x != y {
                    return x.cmp(&y);
                }
                a.next();
                b.next();
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Orders entries by `element[key]` in case-insensitive natural order.
///
/// The sort is stable and keeps every entry's original key: the result is a
/// permutation of the input. Elements without the field sort as the empty
/// string.
pub fn sort_by_key(collection: &Collection, key: &Key) -> Collection {
    let mut entries: Vec<(String, (Key, Value))> = collection
        .entries()
        .iter()
        .map(|(k, v)| {
            let field = v.get(key).map(Value::to_text).unwrap_or_default();
            (field, (k.clone(), v.clone()))
        })
        .collect();
    entries.sort_by(|(a, _), (b, _)| natural_cmp(a, b));
    Collection::from_entries(entries.into_iter().map(|(_, entry)| entry))
}

/// Random permutation of the values, re-indexed as a sequence.
pub fn shuffle(collection: &Collection) -> Collection {
    shuffle_with(collection, &mut rand::thread_rng())
}

pub fn shuffle_with<R: Rng + ?Sized>(collection: &Collection, rng: &mut R) -> Collection {
    let mut values: Vec<Value> = collection.values().cloned().collect();
    values.shuffle(rng);
    Collection::from_values(values)
}

pub fn random_element(collection: &Collection) -> Result<&Value, CollectionError> {
    random_element_with(collection, &mut rand::thread_rng())
}

pub fn random_element_with<'a, R: Rng + ?Sized>(
    collection: &'a Collection,
    rng: &mut R,
) -> Result<&'a Value, CollectionError> {
    collection
        .entries()
        .choose(rng)
        .map(|(_, v)| v)
        .ok_or(CollectionError::EmptyCollection)
}
