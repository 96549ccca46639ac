//! Substring search with optional case folding.
//!
//! All offsets are byte offsets into the original text. Case-insensitive
//! lookups go through an escaped `(?i)` regex so that matches are reported
//! against the original bytes even when folding changes lengths.

use regex::{Regex, RegexBuilder};

/// Regex matching `needle` literally.
pub(crate) fn literal_regex(needle: &str, case_insensitive: bool) -> Option<Regex> {
    RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(case_insensitive)
        .build()
        .ok()
}

/// First occurrence of `needle` at or after byte offset `start`.
///
/// Returns `None` when absent, or when `start` is past the end or inside a
/// character. An empty needle is found at `start`.
pub fn index_of(text: &str, needle: &str, case_insensitive: bool, start: usize) -> Option<usize> {
    if start > text.len() || !text.is_char_boundary(start) {
        return None;
    }
    if needle.is_empty() {
        return Some(start);
    }
    if !case_insensitive {
        return text[start..].find(needle).map(|pos| pos + start);
    }
    literal_regex(needle, true)?
        .find_at(text, start)
        .map(|m| m.start())
}

/// Byte range of the last occurrence of `needle`, overlaps included.
pub(crate) fn last_match(
    text: &str,
    needle: &str,
    case_insensitive: bool,
) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }
    if !case_insensitive {
        return text.rfind(needle).map(|pos| (pos, pos + needle.len()));
    }

    let re = literal_regex(needle, true)?;
    let mut last = None;
    let mut pos = 0;
    while let Some(m) = re.find_at(text, pos) {
        last = Some((m.start(), m.end()));
        // step one char past the match start so overlapping matches count
        pos = m.start() + text[m.start()..].chars().next().map_or(1, char::len_utf8);
        if pos > text.len() {
            break;
        }
    }
    last
}

/// Last occurrence of `needle`.
pub fn last_index_of(text: &str, needle: &str, case_insensitive: bool) -> Option<usize> {
    last_match(text, needle, case_insensitive).map(|(start, _)| start)
}

pub fn contains(text: &str, needle: &str, case_insensitive: bool) -> bool {
    index_of(text, needle, case_insensitive, 0).is_some()
}

/// Compares the first `prefix.len()` bytes of `text` with `prefix`.
pub fn starts_with(text: &str, prefix: &str, case_insensitive: bool) -> bool {
    match text.get(..prefix.len()) {
        Some(head) if case_insensitive => head.to_lowercase() == prefix.to_lowercase(),
        Some(head) => head == prefix,
        None => false,
    }
}

/// Compares the last `suffix.len()` bytes of `text` with `suffix`.
pub fn ends_with(text: &str, suffix: &str, case_insensitive: bool) -> bool {
    let tail = text
        .len()
        .checked_sub(suffix.len())
        .and_then(|start| text.get(start..));
    match tail {
        Some(tail) if case_insensitive => tail.to_lowercase() == suffix.to_lowercase(),
        Some(tail) => tail == suffix,
        None => false,
    }
}
