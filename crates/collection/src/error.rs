use thiserror::Error;

/// Errors that can occur while operating on a collection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("invalid index {index}: collection has {len} element(s)")]
    Index { index: usize, len: usize },
    #[error("operation is undefined on an empty collection")]
    EmptyCollection,
}
