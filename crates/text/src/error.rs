use thiserror::Error;

/// Errors that can occur in text operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
    #[error("malformed UTF-8 input: invalid sequence after byte {valid_up_to}")]
    Encoding { valid_up_to: usize },
    #[error("could not decode {encoding} input: {reason}")]
    Decode {
        encoding: &'static str,
        reason: String,
    },
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("invalid key: {0}")]
    InvalidKey(String),
}
