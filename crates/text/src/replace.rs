//! Literal and pattern replacement.
//!
//! Literal replacements escape `search` before building a regex and insert
//! `replacement` verbatim (no `$1` expansion). Pattern replacements take a
//! raw regex and support group expansion.

use regex::{NoExpand, Regex};
use tracing::warn;

use crate::error::TextError;
use crate::search::{last_match, literal_regex};

fn replace_literal(
    text: &str,
    search: &str,
    replacement: &str,
    case_insensitive: bool,
    limit: usize,
) -> String {
    if search.is_empty() {
        return text.to_string();
    }
    match literal_regex(search, case_insensitive) {
        Some(re) => re.replacen(text, limit, NoExpand(replacement)).into_owned(),
        None => {
            warn!(search_len = search.len(), "replace_literal_pattern_rejected");
            text.to_string()
        }
    }
}

/// Replaces the first occurrence of `search`.
pub fn replace_first(text: &str, search: &str, replacement: &str, case_insensitive: bool) -> String {
    replace_literal(text, search, replacement, case_insensitive, 1)
}

/// Replaces every non-overlapping occurrence of `search`.
pub fn replace_all(text: &str, search: &str, replacement: &str, case_insensitive: bool) -> String {
    replace_literal(text, search, replacement, case_insensitive, 0)
}

/// Replaces the last occurrence of `search` by splicing its byte range.
pub fn replace_last(text: &str, search: &str, replacement: &str, case_insensitive: bool) -> String {
    match last_match(text, search, case_insensitive) {
        Some((start, end)) => {
            let mut out = String::with_capacity(text.len() + replacement.len());
            out.push_str(&text[..start]);
            out.push_str(replacement);
            out.push_str(&text[end..]);
            out
        }
        None => text.to_string(),
    }
}

fn compile(pattern: &str) -> Result<Regex, TextError> {
    Regex::new(pattern).map_err(|err| TextError::InvalidPattern(err.to_string()))
}

/// Replaces every match of `pattern`; `$name`/`$1` groups expand.
pub fn replace_all_matches(
    text: &str,
    pattern: &str,
    replacement: &str,
) -> Result<String, TextError> {
    Ok(compile(pattern)?.replace_all(text, replacement).into_owned())
}

/// Replaces the first match of `pattern`.
pub fn replace_first_match(
    text: &str,
    pattern: &str,
    replacement: &str,
) -> Result<String, TextError> {
    Ok(compile(pattern)?.replacen(text, 1, replacement).into_owned())
}

/// All matches of `pattern` at or after byte offset `start`, as
/// `(offset, matched_text)` pairs.
pub fn matches(text: &str, pattern: &str, start: usize) -> Result<Vec<(usize, String)>, TextError> {
    let re = compile(pattern)?;
    if start > text.len() || !text.is_char_boundary(start) {
        return Ok(Vec::new());
    }
    let mut found = Vec::new();
    let mut pos = start;
    while pos <= text.len() {
        let Some(m) = re.find_at(text, pos) else {
            break;
        };
        found.push((m.start(), m.as_str().to_string()));
        pos = if m.end() > m.start() {
            m.end()
        } else {
            m.end() + text[m.end()..].chars().next().map_or(1, char::len_utf8)
        };
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_all_escape_metacharacters() {
        assert_eq!(replace_first("a.b.c", ".", "-", false), "a-b.c");
        assert_eq!(replace_all("a.b.c", ".", "-", false), "a-b-c");
        assert_eq!(replace_all("1+1=2", "1+1", "two", false), "two=2");
        assert_eq!(replace_first("path/to/x", "/", "\\", false), "path\\to/x");
    }

    #[test]
    fn replacement_is_literal() {
        assert_eq!(replace_first("cost", "cost", "$1", false), "$1");
    }

    #[test]
    fn case_flag_controls_matching() {
        assert_eq!(replace_all("Foo foo FOO", "foo", "x", false), "Foo x FOO");
        assert_eq!(replace_all("Foo foo FOO", "foo", "x", true), "x x x");
        assert_eq!(replace_first("Foo foo", "foo", "x", true), "x foo");
    }

    #[test]
    fn replace_last_splices_final_occurrence() {
        assert_eq!(replace_last("a-b-c", "-", "+", false), "a-b+c");
        assert_eq!(replace_last("Été été", "ÉTÉ", "summer", true), "Été summer");
        assert_eq!(replace_last("abc", "z", "y", true), "abc");
    }

    #[test]
    fn empty_search_is_a_no_op() {
        assert_eq!(replace_all("abc", "", "x", false), "abc");
        assert_eq!(replace_last("abc", "", "x", false), "abc");
    }

    #[test]
    fn pattern_replacement_expands_groups() {
        let out = replace_all_matches("2024-01-31", r"(\d+)-(\d+)-(\d+)", "$3/$2/$1").unwrap();
        assert_eq!(out, "31/01/2024");
        let out = replace_first_match("a1b2", r"\d", "#").unwrap();
        assert_eq!(out, "a#b2");
    }

    #[test]
    fn bad_pattern_is_reported() {
        assert!(matches!(
            replace_all_matches("x", "(", ""),
            Err(TextError::InvalidPattern(_))
        ));
    }

    #[test]
    fn matches_report_offsets() {
        let found = matches("a1 b22 c333", r"\d+", 3).unwrap();
        assert_eq!(found, vec![(4, "22".to_string()), (8, "333".to_string())]);
    }
}
