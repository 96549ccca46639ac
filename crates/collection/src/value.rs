//! Element and collection types.
//!
//! A [`Collection`] is an ordered list of `(Key, Value)` entries. Iteration
//! order is insertion order. When the keys are exactly `0..len` in order the
//! collection behaves as a sequence; otherwise it is associative.
//!
//! Elements are a tagged [`Value`]: a [`Scalar`], a nested sequence, or a
//! nested mapping. Operations that need a field of an element (sort by key,
//! min/max by key) go through [`Value::get`].
//!
//! # Examples
//!
//! ```rust
//! use collection::{Collection, Key, Value};
//!
//! let seq = Collection::from_values(["a", "b"].map(Value::from));
//! assert!(seq.is_sequence());
//! assert_eq!(seq.get(&Key::Index(1)), Some(&Value::from("b")));
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Key of a collection entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Index(i64),
    Name(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Index(value)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Index(value as i64)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Name(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Name(value)
    }
}

/// Leaf value of a collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Numeric view of the scalar: integers, floats and numeric strings.
    ///
    /// Booleans and null are not numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Int(value) => Some(*value as f64),
            Scalar::Float(value) => Some(*value),
            Scalar::Text(text) => parse_numeric(text),
            Scalar::Null | Scalar::Bool(_) => None,
        }
    }

    /// String form used for comparisons and serialization.
    pub fn to_text(&self) -> String {
        match self {
            Scalar::Null => String::new(),
            Scalar::Bool(true) => "1".to_string(),
            Scalar::Bool(false) => String::new(),
            Scalar::Int(value) => value.to_string(),
            Scalar::Float(value) => format_float(*value),
            Scalar::Text(text) => text.clone(),
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Null => false,
            Scalar::Bool(value) => *value,
            Scalar::Int(value) => *value != 0,
            Scalar::Float(value) => *value != 0.0,
            Scalar::Text(text) => !(text.is_empty() || text == "0"),
        }
    }

    /// Equality where `1`, `1.0` and `"1"` are the same value.
    pub fn loose_eq(&self, other: &Scalar) -> bool {
        match (self.as_number(), other.as_number()) {
            (Some(left), Some(right)) => left == right,
            _ => self.to_text() == other.to_text(),
        }
    }
}

fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Parses a numeric string: optional surrounding whitespace, sign, decimal
/// point and exponent. `inf`/`NaN` spellings are rejected.
pub(crate) fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty()
        || !trimmed.bytes().any(|b| b.is_ascii_digit())
        || !trimmed
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Element of a collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    Sequence(Vec<Value>),
    Mapping(Collection),
}

impl Value {
    pub fn null() -> Self {
        Value::Scalar(Scalar::Null)
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(Scalar::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        self.as_scalar().and_then(Scalar::as_number)
    }

    /// Field access on a nested element. Scalars have no fields.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        match (self, key) {
            (Value::Mapping(map), key) => map.get(key),
            (Value::Sequence(items), Key::Index(index)) => {
                usize::try_from(*index).ok().and_then(|i| items.get(i))
            }
            _ => None,
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Scalar(scalar) => scalar.is_truthy(),
            Value::Sequence(items) => !items.is_empty(),
            Value::Mapping(map) => !map.is_empty(),
        }
    }

    /// Text form of a scalar; nested collections render as compact JSON.
    pub fn to_text(&self) -> String {
        match self {
            Value::Scalar(scalar) => scalar.to_text(),
            nested => serde_json::Value::from(nested).to_string(),
        }
    }

    /// Scalars compare loosely, nested values structurally.
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Scalar(left), Value::Scalar(right)) => left.loose_eq(right),
            _ => self == other,
        }
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        Value::Scalar(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Scalar(Scalar::Text(value.to_string()))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Scalar(Scalar::Text(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Scalar(Scalar::Int(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Scalar(Scalar::Int(i64::from(value)))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Scalar(Scalar::Float(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Scalar(Scalar::Bool(value))
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Sequence(value)
    }
}

impl From<Collection> for Value {
    fn from(value: Collection) -> Self {
        Value::Mapping(value)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::null(),
            serde_json::Value::Bool(b) => Value::from(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::from(i),
                None => Value::from(n.as_f64().unwrap_or_default()),
            },
            serde_json::Value::String(s) => Value::from(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Mapping(Collection::from_entries(
                map.into_iter().map(|(k, v)| (Key::Name(k), Value::from(v))),
            )),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Scalar(Scalar::Null) => serde_json::Value::Null,
            Value::Scalar(Scalar::Bool(b)) => serde_json::Value::Bool(*b),
            Value::Scalar(Scalar::Int(i)) => serde_json::Value::from(*i),
            Value::Scalar(Scalar::Float(f)) => serde_json::Value::from(*f),
            Value::Scalar(Scalar::Text(s)) => serde_json::Value::String(s.clone()),
            Value::Sequence(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Mapping(map) => serde_json::Value::from(map),
        }
    }
}

/// Ordered keyed collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    entries: Vec<(Key, Value)>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence with keys `0..n`.
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let entries = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| (Key::Index(i as i64), v.into()))
            .collect();
        Self { entries }
    }

    /// Entries taken as given; a repeated key keeps its first position and
    /// the last value.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Key, Value)>,
    {
        let mut collection = Self::new();
        for (key, value) in entries {
            collection.set(key, value);
        }
        collection
    }

    /// Rebuilds entries with merge semantics: integer keys are renumbered
    /// from zero in order, name keys are kept and a repeated name overwrites
    /// the earlier value in place.
    pub(crate) fn renumbered<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Key, Value)>,
    {
        let mut out: Vec<(Key, Value)> = Vec::new();
        let mut named: HashMap<String, usize> = HashMap::new();
        let mut next_index = 0i64;
        for (key, value) in entries {
            match key {
                Key::Index(_) => {
                    out.push((Key::Index(next_index), value));
                    next_index += 1;
                }
                Key::Name(name) => {
                    if let Some(&pos) = named.get(&name) {
                        out[pos].1 = value;
                    } else {
                        named.insert(name.clone(), out.len());
                        out.push((Key::Name(name), value));
                    }
                }
            }
        }
        Self { entries: out }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(Key, Value)] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<(Key, Value)> {
        self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Value at a position, regardless of its key.
    pub fn at(&self, position: usize) -> Option<&Value> {
        self.entries.get(position).map(|(_, v)| v)
    }

    /// Sets `key`, overwriting in place when it already exists.
    pub fn set(&mut self, key: Key, value: Value) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Appends under the next free integer key.
    pub fn push(&mut self, value: Value) {
        let next = self
            .entries
            .iter()
            .filter_map(|(k, _)| match k {
                Key::Index(i) => Some(*i + 1),
                Key::Name(_) => None,
            })
            .max()
            .unwrap_or(0)
            .max(0);
        self.entries.push((Key::Index(next), value));
    }

    /// True when keys are exactly `0..len` in order.
    pub fn is_sequence(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(i, (k, _))| *k == Key::Index(i as i64))
    }
}

impl<V: Into<Value>> FromIterator<V> for Collection {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Collection::from_values(iter)
    }
}

impl IntoIterator for Collection {
    type Item = (Key, Value);
    type IntoIter = std::vec::IntoIter<(Key, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl From<&Collection> for serde_json::Value {
    fn from(collection: &Collection) -> Self {
        if collection.is_sequence() {
            serde_json::Value::Array(collection.values().map(serde_json::Value::from).collect())
        } else {
            serde_json::Value::Object(
                collection
                    .iter()
                    .map(|(k, v)| (k.to_string(), serde_json::Value::from(v)))
                    .collect(),
            )
        }
    }
}

impl From<serde_json::Value> for Collection {
    /// Arrays become sequences, objects become mappings, scalars become a
    /// one-element sequence.
    fn from(value: serde_json::Value) -> Self {
        match Value::from(value) {
            Value::Sequence(items) => Collection::from_values(items),
            Value::Mapping(map) => map,
            scalar => Collection::from_values([scalar]),
        }
    }
}
