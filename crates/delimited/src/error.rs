use collection::CollectionError;
use thiserror::Error;

/// Errors that can occur while operating on a delimited list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("invalid index {index}: list has {len} item(s)")]
    Index { index: usize, len: usize },
    #[error("operation is undefined on an empty list")]
    EmptyList,
}

impl From<CollectionError> for ListError {
    fn from(value: CollectionError) -> Self {
        match value {
            CollectionError::Index { index, len } => ListError::Index { index, len },
            CollectionError::EmptyCollection => ListError::EmptyList,
        }
    }
}
