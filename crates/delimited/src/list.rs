use std::fmt;

use collection::{Collection, Key, Value};
use tracing::debug;

use crate::error::ListError;

pub const DEFAULT_DELIMITER: &str = ",";

/// A string read as an ordered list of items separated by `delimiter`.
///
/// Operations parse the text, delegate to the collection layer and
/// serialize the result back; `self` is never modified. Items are not
/// escaped, so an item containing the delimiter splits on the next parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DelimitedList {
    text: String,
    delimiter: String,
}

impl Default for DelimitedList {
    fn default() -> Self {
        Self::new("")
    }
}

impl DelimitedList {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_delimiter(text, DEFAULT_DELIMITER)
    }

    pub fn with_delimiter(text: impl Into<String>, delimiter: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            delimiter: delimiter.into(),
        }
    }

    /// Joins `items` with `delimiter`.
    pub fn from_items<I, S>(items: I, delimiter: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items: Vec<S> = items.into_iter().collect();
        Self::with_delimiter(text::join(&items, delimiter), delimiter)
    }

    /// Serializes the values of `collection` in order; keys are dropped and
    /// nested values render as JSON.
    pub fn from_collection(collection: &Collection, delimiter: &str) -> Self {
        Self::from_items(collection.values().map(Value::to_text), delimiter)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Items in order. Empty text is an empty list, not one empty item.
    pub fn to_sequence(&self) -> Vec<String> {
        if self.text.is_empty() {
            return Vec::new();
        }
        text::split(&self.text, &self.delimiter)
    }

    /// Items as a sequence collection keyed `0..len`.
    pub fn to_collection(&self) -> Collection {
        Collection::from_values(self.to_sequence())
    }

    fn reserialize(&self, collection: &Collection) -> Self {
        Self::from_collection(collection, &self.delimiter)
    }

    pub fn len(&self) -> usize {
        self.to_sequence().len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn first(&self) -> Result<String, ListError> {
        self.to_sequence()
            .into_iter()
            .next()
            .ok_or(ListError::EmptyList)
    }

    pub fn last(&self) -> Result<String, ListError> {
        self.to_sequence().pop().ok_or(ListError::EmptyList)
    }

    /// Item at `index`, `None` when out of range.
    pub fn get_at(&self, index: usize) -> Option<String> {
        self.to_sequence().into_iter().nth(index)
    }

    /// Position of the first item loosely equal to `value` (`"1"` matches
    /// `"1.0"`).
    pub fn find(&self, value: &str) -> Option<usize> {
        self.find_with(value, false)
    }

    /// Like [`find`](Self::find), ignoring case.
    pub fn find_no_case(&self, value: &str) -> Option<usize> {
        self.find_with(value, true)
    }

    fn find_with(&self, value: &str, case_insensitive: bool) -> Option<usize> {
        match collection::find_index(&self.to_collection(), &Value::from(value), case_insensitive)? {
            Key::Index(i) => usize::try_from(i).ok(),
            Key::Name(_) => None,
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.find(value).is_some()
    }

    pub fn contains_no_case(&self, value: &str) -> bool {
        self.find_no_case(value).is_some()
    }

    /// Inserts `value` before position `index`; `index == len` appends.
    pub fn insert_at(&self, index: usize, value: &str) -> Result<Self, ListError> {
        let updated = collection::insert_at(&self.to_collection(), index, Value::from(value))?;
        Ok(self.reserialize(&updated))
    }

    pub fn delete_at(&self, index: usize) -> Result<Self, ListError> {
        let updated = collection::delete_at(&self.to_collection(), index)?;
        Ok(self.reserialize(&updated))
    }

    /// Replaces the item at `index`.
    pub fn set_at(&self, index: usize, value: &str) -> Result<Self, ListError> {
        let mut items = self.to_collection();
        let len = items.len();
        if index >= len {
            debug!(index, len, "set_at_out_of_range");
            return Err(ListError::Index { index, len });
        }
        items.set(Key::from(index), Value::from(value));
        Ok(self.reserialize(&items))
    }

    /// Adds `value` at the end without parsing the list.
    pub fn append(&self, value: &str) -> Self {
        if self.text.is_empty() {
            return Self::with_delimiter(value, self.delimiter.clone());
        }
        let mut text = String::with_capacity(self.text.len() + self.delimiter.len() + value.len());
        text.push_str(&self.text);
        text.push_str(&self.delimiter);
        text.push_str(value);
        Self::with_delimiter(text, self.delimiter.clone())
    }

    /// Adds `value` at the front without parsing the list.
    pub fn prepend(&self, value: &str) -> Self {
        if self.text.is_empty() {
            return Self::with_delimiter(value, self.delimiter.clone());
        }
        let mut text = String::with_capacity(self.text.len() + self.delimiter.len() + value.len());
        text.push_str(value);
        text.push_str(&self.delimiter);
        text.push_str(&self.text);
        Self::with_delimiter(text, self.delimiter.clone())
    }

    /// Same items joined with `delimiter`.
    pub fn change_delimiter(&self, delimiter: &str) -> Self {
        Self::from_items(self.to_sequence(), delimiter)
    }
}

impl fmt::Display for DelimitedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for DelimitedList {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DelimitedList {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<DelimitedList> for String {
    fn from(value: DelimitedList) -> Self {
        value.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> DelimitedList {
        DelimitedList::new("red,Green,blue")
    }

    #[test]
    fn empty_text_is_an_empty_list() {
        let list = DelimitedList::new("");
        assert!(list.to_sequence().is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.first(), Err(ListError::EmptyList));
        assert_eq!(list.last(), Err(ListError::EmptyList));
    }

    #[test]
    fn reads_by_position() {
        let list = colors();
        assert_eq!(list.len(), 3);
        assert_eq!(list.first().unwrap(), "red");
        assert_eq!(list.last().unwrap(), "blue");
        assert_eq!(list.get_at(1).as_deref(), Some("Green"));
        assert_eq!(list.get_at(3), None);
    }

    #[test]
    fn find_and_contains_share_one_path() {
        let list = colors();
        assert_eq!(list.find("green"), None);
        assert_eq!(list.find_no_case("green"), Some(1));
        assert!(!list.contains("green"));
        assert!(list.contains_no_case("GREEN"));
        assert!(DelimitedList::new("1,2,3").contains("2.0"));
    }

    #[test]
    fn find_no_case_is_never_narrower_than_find() {
        let list = DelimitedList::new("1,2,3");
        assert_eq!(list.find("2.0"), Some(1));
        assert_eq!(list.find_no_case("2.0"), Some(1));
        assert!(list.contains_no_case("3.0"));
    }

    #[test]
    fn mutations_return_new_lists() {
        let list = colors();
        assert_eq!(list.insert_at(1, "pink").unwrap().as_str(), "red,pink,Green,blue");
        assert_eq!(list.insert_at(3, "tail").unwrap().as_str(), "red,Green,blue,tail");
        assert_eq!(list.delete_at(0).unwrap().as_str(), "Green,blue");
        assert_eq!(list.set_at(2, "navy").unwrap().as_str(), "red,Green,navy");
        assert_eq!(list.as_str(), "red,Green,blue");
    }

    #[test]
    fn bounds_are_enforced() {
        let list = colors();
        assert_eq!(
            list.insert_at(4, "x"),
            Err(ListError::Index { index: 4, len: 3 })
        );
        assert_eq!(list.delete_at(3), Err(ListError::Index { index: 3, len: 3 }));
        assert_eq!(list.set_at(3, "x"), Err(ListError::Index { index: 3, len: 3 }));
    }

    #[test]
    fn fast_paths_match_the_parsed_path() {
        for text in ["", "a", "a|b"] {
            let list = DelimitedList::with_delimiter(text, "|");
            let len = list.len();
            assert_eq!(list.append("z"), list.insert_at(len, "z").unwrap());
            assert_eq!(list.prepend("z"), list.insert_at(0, "z").unwrap());
        }
    }

    #[test]
    fn delimiter_can_change() {
        let list = DelimitedList::with_delimiter("a; b;c", ";");
        let piped = list.change_delimiter("|");
        assert_eq!(piped.as_str(), "a| b|c");
        assert_eq!(piped.delimiter(), "|");
        assert_eq!(piped.to_sequence(), list.to_sequence());
    }

    #[test]
    fn display_renders_text() {
        assert_eq!(colors().to_string(), "red,Green,blue");
        assert_eq!(String::from(colors()), "red,Green,blue");
    }
}
