//! Hex digests and HMACs over UTF-8 text.

use std::fmt;
use std::str::FromStr;

use hmac::{Hmac, Mac};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};
use tracing::debug;

use crate::error::TextError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    pub fn digest_hex(self, data: &[u8]) -> String {
        match self {
            HashAlgorithm::Md5 => hex::encode(Md5::digest(data)),
            HashAlgorithm::Sha1 => hex::encode(Sha1::digest(data)),
            HashAlgorithm::Sha256 => hex::encode(Sha256::digest(data)),
            HashAlgorithm::Sha384 => hex::encode(Sha384::digest(data)),
            HashAlgorithm::Sha512 => hex::encode(Sha512::digest(data)),
        }
    }

    pub fn hmac_hex(self, data: &[u8], key: &[u8]) -> Result<String, TextError> {
        macro_rules! mac {
            ($digest:ty) => {{
                let mut mac = <Hmac<$digest> as Mac>::new_from_slice(key)
                    .map_err(|err| TextError::InvalidKey(err.to_string()))?;
                mac.update(data);
                hex::encode(mac.finalize().into_bytes())
            }};
        }
        Ok(match self {
            HashAlgorithm::Md5 => mac!(Md5),
            HashAlgorithm::Sha1 => mac!(Sha1),
            HashAlgorithm::Sha256 => mac!(Sha256),
            HashAlgorithm::Sha384 => mac!(Sha384),
            HashAlgorithm::Sha512 => mac!(Sha512),
        })
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "md5" => Ok(HashAlgorithm::Md5),
            "sha1" => Ok(HashAlgorithm::Sha1),
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha384" => Ok(HashAlgorithm::Sha384),
            "sha512" => Ok(HashAlgorithm::Sha512),
            _ => {
                debug!(algorithm = s, "unsupported_hash_algorithm");
                Err(TextError::UnsupportedAlgorithm(s.to_string()))
            }
        }
    }
}

/// Lowercase hex digest of `text`.
pub fn hash(text: &str, algorithm: &str) -> Result<String, TextError> {
    Ok(algorithm.parse::<HashAlgorithm>()?.digest_hex(text.as_bytes()))
}

/// Lowercase hex HMAC of `text` keyed with `key`.
pub fn hmac(text: &str, key: &str, algorithm: &str) -> Result<String, TextError> {
    algorithm
        .parse::<HashAlgorithm>()?
        .hmac_hex(text.as_bytes(), key.as_bytes())
}
