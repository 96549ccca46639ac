//! normkit text layer.
//!
//! String search, replacement, wrapping, encoding and slug generation over
//! UTF-8 text.
//!
//! ## What we do
//!
//! - Case-sensitive and case-insensitive search/replace with byte offsets
//!   that always point into the caller's text
//! - Markup stripping and column-bounded word wrap with line truncation
//! - Named encodings (`url`, `rawurl`, `base64`, `html`, `uu`) and hex digests
//! - Script-obfuscated `mailto:` links
//! - Slugs for file names and URLs through an injected transliteration table
//!
//! ## Pure function guarantee
//!
//! No I/O and no locale lookups. The built-in transliteration table and the
//! compiled patterns are built once and never change afterwards.
//!
//! ## Invariants worth knowing
//!
//! - Offsets are bytes; `char_at`/`substring`/`left`/`right` count chars
//! - Not found is `None`, never `-1`
//! - Literal replacements never expand `$` groups
//! - Unknown algorithm or encoding names fail with
//!   [`TextError::UnsupportedAlgorithm`]

mod case;
mod encode;
mod error;
mod format;
mod hash;
mod markup;
mod replace;
mod search;
pub mod slug;
mod split;
mod wrap;

pub use crate::case::{capitalize_first, char_at, left, right, substring, to_lower, to_upper};
pub use crate::encode::{
    base64_decode, base64_encode, decode, encode, url_decode, url_encode, uu_decode, uu_encode,
    Encoding,
};
pub use crate::error::TextError;
pub use crate::format::format;
pub use crate::hash::{hash, hmac, HashAlgorithm};
pub use crate::markup::{html_decode, html_encode, protect_email_link, strip_tags};
pub use crate::replace::{
    matches, replace_all, replace_all_matches, replace_first, replace_first_match, replace_last,
};
pub use crate::search::{contains, ends_with, index_of, last_index_of, starts_with};
pub use crate::slug::{clean, clean_file_name, Slugifier, TransliterationTable};
pub use crate::split::{join, split};
pub use crate::wrap::{word_wrap, WrapOptions};
