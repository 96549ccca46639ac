//! Splitting on a delimiter and joining back.

/// Splits `text` on `delimiter`. An empty delimiter yields one part per
/// character; empty text yields a single empty part.
pub fn split(text: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        return text.chars().map(String::from).collect();
    }
    text.split(delimiter).map(str::to_string).collect()
}

pub fn join<S: AsRef<str>>(parts: &[S], glue: &str) -> String {
    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push_str(glue);
        }
        out.push_str(part.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_empty_fields() {
        assert_eq!(split("a,,b,", ","), vec!["a", "", "b", ""]);
        assert_eq!(split("", ","), vec![""]);
        assert_eq!(split("a::b", "::"), vec!["a", "b"]);
    }

    #[test]
    fn empty_delimiter_splits_chars() {
        assert_eq!(split("été", ""), vec!["é", "t", "é"]);
    }

    #[test]
    fn join_inverts_split() {
        let parts = split("x|y|z", "|");
        assert_eq!(join(&parts, "|"), "x|y|z");
        assert_eq!(join::<&str>(&[], ","), "");
    }
}
