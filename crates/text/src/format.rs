//! `%key%` placeholder substitution.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Replaces each `%key%` token whose key is present in `replacements`.
///
/// Single left-to-right pass: substituted values are never rescanned, and
/// tokens with unknown keys are copied through unchanged.
pub fn format<K, V>(text: &str, replacements: &HashMap<K, V>) -> String
where
    K: Borrow<str> + Eq + Hash,
    V: AsRef<str>,
{
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('%') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('%') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let key = &after[..close];
        match replacements.get(key) {
            Some(value) => {
                out.push_str(value.as_ref());
                rest = &after[close + 1..];
            }
            None => {
                // the closing % may open the next token
                out.push('%');
                out.push_str(key);
                rest = &after[close..];
            }
        }
    }
    out.push_str(rest);
    out
}
