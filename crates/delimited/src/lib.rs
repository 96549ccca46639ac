//! normkit delimited-list layer.
//!
//! A string such as `"red,green,blue"` behaves as an ordered list. Each
//! operation splits the text with [`text::split`], runs the matching
//! collection operation and joins the result with [`text::join`].
//!
//! ## Invariants worth knowing
//!
//! - `""` is the empty list, never a list holding one empty item
//! - Splitting a serialized list gives back the same items as long as no
//!   item contains the delimiter (there is no escaping)
//! - `append`/`prepend` skip the parse but give the same text as inserting
//!   at the end or front

mod error;
mod list;

pub use crate::error::ListError;
pub use crate::list::{DelimitedList, DEFAULT_DELIMITER};

#[cfg(test)]
mod tests {
    use super::*;
    use collection::{sort_by_key, Collection, Key, Value};

    #[test]
    fn serialize_then_parse_keeps_items() {
        let items = vec!["alpha", "beta gamma", "", "delta"];
        let list = DelimitedList::from_items(&items, ";");
        assert_eq!(list.to_sequence(), items);
        let again = DelimitedList::from_items(list.to_sequence(), ";");
        assert_eq!(again.to_sequence(), list.to_sequence());
    }

    #[test]
    fn items_containing_the_delimiter_split() {
        let list = DelimitedList::from_items(["a,b", "c"], ",");
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn collections_serialize_by_value() {
        let sorted = sort_by_key(
            &Collection::from_entries(vec![
                (Key::from("x"), Value::from("b10")),
                (Key::from("y"), Value::from("b9")),
            ]),
            &Key::from("missing"),
        );
        let list = DelimitedList::from_collection(&sorted, "/");
        assert_eq!(list.as_str(), "b10/b9");
        assert_eq!(list.find("b9"), Some(1));
    }
}
