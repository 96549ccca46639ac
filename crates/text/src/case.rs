//! Case mapping and char-based substrings.

pub fn to_lower(text: &str) -> String {
    text.to_lowercase()
}

pub fn to_upper(text: &str) -> String {
    text.to_uppercase()
}

/// Uppercases the first character and leaves the rest alone.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Character at char position `index`.
pub fn char_at(text: &str, index: usize) -> Option<char> {
    text.chars().nth(index)
}

/// Up to `length` characters starting at char position `start`; runs to the
/// end when `length` is `None`.
pub fn substring(text: &str, start: usize, length: Option<usize>) -> String {
    let tail = text.chars().skip(start);
    match length {
        Some(length) => tail.take(length).collect(),
        None => tail.collect(),
    }
}

/// First `count` characters.
pub fn left(text: &str, count: usize) -> String {
    text.chars().take(count).collect()
}

/// Last `count` characters.
pub fn right(text: &str, count: usize) -> String {
    let total = text.chars().count();
    text.chars().skip(total.saturating_sub(count)).collect()
}
