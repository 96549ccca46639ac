//! Markup stripping and HTML entity handling.

use once_cell::sync::Lazy;
use regex::Regex;

// Comments first so a `>` inside one does not end the match early. A tag
// starts with `<` followed by a letter, `/`, `!` or `?`; a bare `<` is text.
// An opened tag with no closing `>` swallows the rest of the text.
static TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<!--.*?(?:-->|$)|</?[A-Za-z!?][^>]*(?:>|$)").expect("tag pattern compiles")
});

/// Removes tags, comments and any unclosed trailing tag. A `<` followed by
/// whitespace, a digit or punctuation is kept as text.
pub fn strip_tags(text: &str) -> String {
    if !text.contains('<') {
        return text.to_string();
    }
    TAG.replace_all(text, "").into_owned()
}

/// Escapes `& < > " '` as entities. Other characters pass through.
pub fn html_encode(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).into_owned()
}

/// Decodes named and numeric entities.
pub fn html_decode(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

/// Builds a `mailto:` anchor and hides it behind a percent-escaped
/// `document.write` script. `name` defaults to the address and `text` to
/// `name`; empty strings count as absent.
pub fn protect_email_link(email: &str, name: Option<&str>, text: Option<&str>) -> String {
    let email = email.replace('"', "\\\"");
    let name = name.filter(|n| !n.is_empty()).unwrap_or(email.as_str());
    let text = text.filter(|t| !t.is_empty()).unwrap_or(name);
    let clear = format!(r#"document.write('<a href="mailto:{email}">{text}</a>')"#);
    let escaped: String = clear.bytes().map(|b| format!("%{b:02x}")).collect();
    format!(r#"<script type="text/javascript">eval(unescape('{escaped}'))</script>"#)
}
