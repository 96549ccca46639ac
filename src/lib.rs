//! Workspace umbrella crate for normkit.
//!
//! This crate stitches the collection, text and delimited-list layers
//! together with the number and date helpers and a YAML-driven
//! configuration, so callers can depend on one crate.

pub mod config;
pub mod number;
pub mod time;

pub use collection::{
    append, avg, dedupe, delete_at, filter_recursive, find_index, insert_at, is_associative,
    keys, max, merge, min, natural_cmp, prepend, random_element, random_element_with, reverse,
    shuffle, shuffle_with, slice, sort_by_key, sort_numeric, sum, values, Collection,
    CollectionError, Key, Scalar, Value,
};
pub use delimited::{DelimitedList, ListError, DEFAULT_DELIMITER};
pub use text::{
    clean, clean_file_name, strip_tags, word_wrap, Encoding, HashAlgorithm, Slugifier, TextError,
    TransliterationTable, WrapOptions,
};

pub use crate::config::{ConfigLoadError, ToolkitConfig};
pub use crate::time::TimeError;

/// Full text API, for the operations not re-exported at the root.
pub mod text_ops {
    pub use text::*;
}

use thiserror::Error;

/// Any error the toolkit can return.
#[derive(Debug, Error)]
pub enum NormkitError {
    #[error("collection operation failed: {0}")]
    Collection(#[from] CollectionError),

    #[error("text operation failed: {0}")]
    Text(#[from] TextError),

    #[error("list operation failed: {0}")]
    List(#[from] ListError),

    #[error("date operation failed: {0}")]
    Time(#[from] TimeError),

    #[error("configuration failed: {0}")]
    Config(#[from] ConfigLoadError),
}
