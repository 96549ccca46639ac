//! Column-bounded word wrapping with optional line truncation.

use serde::{Deserialize, Serialize};
use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};
use tracing::debug;

use crate::markup::strip_tags;

/// How wrapped lines are joined and truncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapOptions {
    pub break_token: String,
    /// Keep at most this many lines; `None` keeps all.
    pub max_lines: Option<usize>,
    /// Appended to the last kept line when lines were dropped.
    pub truncation_suffix: String,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            break_token: "\n".to_string(),
            max_lines: None,
            truncation_suffix: String::new(),
        }
    }
}

impl WrapOptions {
    pub fn with_break(break_token: impl Into<String>) -> Self {
        Self {
            break_token: break_token.into(),
            ..Self::default()
        }
    }

    pub fn truncate(mut self, max_lines: usize, suffix: impl Into<String>) -> Self {
        self.max_lines = Some(max_lines);
        self.truncation_suffix = suffix.into();
        self
    }
}

/// Strips markup, then wraps at whitespace so no line exceeds `width`
/// columns. Tabs and other Unicode whitespace break like a space; newlines
/// already in the text are kept. Words longer than `width` are never split;
/// they get a line of their own.
pub fn word_wrap(text: &str, width: usize, options: &WrapOptions) -> String {
    let plain: String = strip_tags(text)
        .chars()
        .map(|c| if c.is_whitespace() && c != '\n' { ' ' } else { c })
        .collect();
    let wrap_options = Options::new(width.max(1))
        .break_words(false)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
        .wrap_algorithm(WrapAlgorithm::FirstFit);
    let lines = textwrap::wrap(&plain, wrap_options);

    match options.max_lines {
        Some(max) if lines.len() > max => {
            debug!(
                lines = lines.len(),
                max_lines = max,
                "word_wrap_truncated"
            );
            let mut out = lines[..max].join(options.break_token.as_str());
            out.push_str(&options.truncation_suffix);
            out
        }
        _ => lines.join(options.break_token.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_stay_within_width() {
        let out = word_wrap("The quick brown fox", 10, &WrapOptions::default());
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines, vec!["The quick", "brown fox"]);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
    }

    #[test]
    fn truncation_keeps_exact_line_count() {
        let options = WrapOptions::with_break("|").truncate(1, "...");
        let out = word_wrap("one two three four five", 3, &options);
        assert_eq!(out, "one...");

        let options = WrapOptions::with_break("|").truncate(2, "…");
        assert_eq!(word_wrap("one two three four five", 3, &options), "one|two…");
    }

    #[test]
    fn no_suffix_when_everything_fits() {
        let options = WrapOptions::default().truncate(5, "...");
        assert_eq!(word_wrap("short text", 20, &options), "short text");
    }

    #[test]
    fn long_words_are_not_split() {
        let out = word_wrap("a extraordinarily b", 5, &WrapOptions::with_break("/"));
        assert_eq!(out, "a/extraordinarily/b");
    }

    #[test]
    fn any_whitespace_is_a_break_point() {
        let out = word_wrap("aaaa\tbbbb\tcccc", 5, &WrapOptions::default());
        assert_eq!(out, "aaaa\nbbbb\ncccc");
        let out = word_wrap("un\u{a0}deux trois", 8, &WrapOptions::with_break("|"));
        assert_eq!(out, "un deux|trois");
    }

    #[test]
    fn less_than_sign_survives_wrapping() {
        let out = word_wrap("Prix < 10 euros pour tous", 10, &WrapOptions::default());
        assert_eq!(out, "Prix < 10\neuros pour\ntous");
    }

    #[test]
    fn markup_is_stripped_first() {
        let out = word_wrap("<p>hello <b>big</b> world</p>", 9, &WrapOptions::default());
        assert_eq!(out, "hello big\nworld");
    }
}
