//! Slug generation for file names and URLs.
//!
//! The pipeline is fixed and order-dependent:
//!
//! 1. strip markup
//! 2. transliterate to ASCII through the injected [`TransliterationTable`]
//! 3. lowercase
//! 4. runs of whitespace and `_` become one hyphen
//! 5. trim hyphens at both ends
//! 6. drop everything that is not an ASCII letter, digit or hyphen
//! 7. collapse repeated hyphens
//!
//! Output only ever holds `[a-z0-9-]`.

mod table;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::TextError;
use crate::markup::strip_tags;

pub use table::TransliterationTable;

static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_]+").expect("separator pattern"));
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9-]").expect("non-word pattern"));
static HYPHENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").expect("hyphen pattern"));

/// Slug pipeline bound to one transliteration table.
#[derive(Debug, Clone, Copy)]
pub struct Slugifier<'a> {
    table: &'a TransliterationTable,
}

impl Default for Slugifier<'static> {
    fn default() -> Self {
        Self::new(TransliterationTable::french())
    }
}

impl<'a> Slugifier<'a> {
    pub fn new(table: &'a TransliterationTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a TransliterationTable {
        self.table
    }

    pub fn slugify(&self, text: &str) -> String {
        let stripped = strip_tags(text);
        let ascii = self.table.transliterate(&stripped);
        let lowered = ascii.to_ascii_lowercase();
        let hyphenated = SEPARATORS.replace_all(&lowered, "-");
        let trimmed = hyphenated.trim_matches('-');
        let words = NON_WORD.replace_all(trimmed, "");
        let collapsed = HYPHENS.replace_all(&words, "-");
        // stage 6 can expose a hyphen that stage 5 could not see ("!-x")
        collapsed.trim_matches('-').to_string()
    }

    /// Like [`slugify`](Self::slugify) for raw bytes; malformed UTF-8 is
    /// rejected instead of replaced.
    pub fn slugify_bytes(&self, bytes: &[u8]) -> Result<String, TextError> {
        match std::str::from_utf8(bytes) {
            Ok(text) => Ok(self.slugify(text)),
            Err(err) => {
                debug!(valid_up_to = err.valid_up_to(), "slugify_rejected_bytes");
                Err(TextError::Encoding {
                    valid_up_to: err.valid_up_to(),
                })
            }
        }
    }

    /// Slugifies the part before the last `.` and re-appends the extension
    /// untouched. A name without a dot is slugified whole.
    pub fn clean_file_name(&self, name: &str) -> String {
        match name.rsplit_once('.') {
            Some((stem, extension)) => format!("{}.{}", self.slugify(stem), extension),
            None => self.slugify(name),
        }
    }
}

/// [`Slugifier::slugify`] with the built-in table.
pub fn clean(text: &str) -> String {
    Slugifier::default().slugify(text)
}

/// [`Slugifier::clean_file_name`] with the built-in table.
pub fn clean_file_name(name: &str) -> String {
    Slugifier::default().clean_file_name(name)
}
