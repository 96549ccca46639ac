//! Named reversible encodings: `url`, `rawurl`, `base64`, `html`, `uu`.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::debug;

use crate::error::TextError;
use crate::markup::{html_decode, html_encode};

/// Characters escaped by form encoding: everything but `A-Za-z0-9-_.`.
const FORM: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// RFC 3986 unreserved characters stay literal.
const RAW: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Form encoding, space becomes `+`.
    Url,
    /// Percent-encoding of everything outside the unreserved set.
    RawUrl,
    Base64,
    Html,
    /// Classic uuencode body: 45-byte lines, no `begin`/`end` header.
    Uu,
}

impl Encoding {
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Url => "url",
            Encoding::RawUrl => "rawurl",
            Encoding::Base64 => "base64",
            Encoding::Html => "html",
            Encoding::Uu => "uu",
        }
    }

    pub fn encode(self, text: &str) -> String {
        match self {
            Encoding::Url => url_encode(text),
            Encoding::RawUrl => utf8_percent_encode(text, RAW).to_string(),
            Encoding::Base64 => base64_encode(text),
            Encoding::Html => html_encode(text),
            Encoding::Uu => uu_encode(text),
        }
    }

    pub fn decode(self, text: &str) -> Result<String, TextError> {
        match self {
            Encoding::Url => url_decode(text),
            Encoding::RawUrl => percent_decode(text, "rawurl"),
            Encoding::Base64 => base64_decode(text),
            Encoding::Html => Ok(html_decode(text)),
            Encoding::Uu => uu_decode(text),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "url" => Ok(Encoding::Url),
            "rawurl" => Ok(Encoding::RawUrl),
            "base64" => Ok(Encoding::Base64),
            "html" => Ok(Encoding::Html),
            "uu" | "uuencode" => Ok(Encoding::Uu),
            _ => {
                debug!(encoding = s, "unsupported_encoding");
                Err(TextError::UnsupportedAlgorithm(s.to_string()))
            }
        }
    }
}

/// Encodes `text` with the encoding called `name`.
pub fn encode(text: &str, name: &str) -> Result<String, TextError> {
    Ok(name.parse::<Encoding>()?.encode(text))
}

/// Decodes `text` with the encoding called `name`.
pub fn decode(text: &str, name: &str) -> Result<String, TextError> {
    name.parse::<Encoding>()?.decode(text)
}

pub fn url_encode(text: &str) -> String {
    // a literal "%20" in the input is itself escaped to "%2520"
    utf8_percent_encode(text, FORM)
        .to_string()
        .replace("%20", "+")
}

pub fn url_decode(text: &str) -> Result<String, TextError> {
    percent_decode(&text.replace('+', " "), "url")
}

fn percent_decode(text: &str, encoding: &'static str) -> Result<String, TextError> {
    percent_decode_str(text)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|err| TextError::Decode {
            encoding,
            reason: err.to_string(),
        })
}

pub fn base64_encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

pub fn base64_decode(text: &str) -> Result<String, TextError> {
    let bytes = STANDARD
        .decode(text.trim())
        .map_err(|err| TextError::Decode {
            encoding: "base64",
            reason: err.to_string(),
        })?;
    String::from_utf8(bytes).map_err(|err| TextError::Decode {
        encoding: "base64",
        reason: err.to_string(),
    })
}

const UU_LINE: usize = 45;

// Zero is written as a backtick rather than a space.
fn uu_char(bits: u8) -> char {
    match bits & 0x3f {
        0 => '`',
        b => char::from(b + 32),
    }
}

fn uu_bits(c: u8) -> Option<u8> {
    (32..=96).contains(&c).then(|| (c - 32) & 0x3f)
}

/// Encodes the UTF-8 bytes of `text`. Each line starts with its byte
/// count; a lone backtick line ends the body. Empty input stays empty.
pub fn uu_encode(text: &str) -> String {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return String::new();
    }
    let mut out = String::with_capacity(bytes.len() * 4 / 3 + bytes.len() / UU_LINE * 2 + 4);
    for line in bytes.chunks(UU_LINE) {
        // chunks never exceed 45 bytes, so the count fits in one char
        out.push(uu_char(line.len() as u8));
        for group in line.chunks(3) {
            let b0 = group[0];
            let b1 = group.get(1).copied().unwrap_or(0);
            let b2 = group.get(2).copied().unwrap_or(0);
            out.push(uu_char(b0 >> 2));
            out.push(uu_char((b0 << 4) | (b1 >> 4)));
            out.push(uu_char((b1 << 2) | (b2 >> 6)));
            out.push(uu_char(b2));
        }
        out.push('\n');
    }
    out.push_str("`\n");
    out
}

pub fn uu_decode(text: &str) -> Result<String, TextError> {
    let malformed = |reason: String| TextError::Decode {
        encoding: "uu",
        reason,
    };
    let mut bytes = Vec::with_capacity(text.len() * 3 / 4);
    for (number, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r').as_bytes();
        let Some(&count_char) = line.first() else {
            continue;
        };
        let count = uu_bits(count_char)
            .ok_or_else(|| malformed(format!("bad length character on line {}", number + 1)))?
            as usize;
        if count == 0 {
            break;
        }
        let body = &line[1..];
        if body.len() < count.div_ceil(3) * 4 {
            return Err(malformed(format!("line {} is shorter than its length", number + 1)));
        }
        let mut line_bytes = Vec::with_capacity(count + 2);
        for group in body.chunks_exact(4).take(count.div_ceil(3)) {
            let mut bits = [0u8; 4];
            for (slot, &c) in bits.iter_mut().zip(group) {
                *slot = uu_bits(c)
                    .ok_or_else(|| malformed(format!("bad character on line {}", number + 1)))?;
            }
            line_bytes.push((bits[0] << 2) | (bits[1] >> 4));
            line_bytes.push((bits[1] << 4) | (bits[2] >> 2));
            line_bytes.push((bits[2] << 6) | bits[3]);
        }
        line_bytes.truncate(count);
        bytes.extend_from_slice(&line_bytes);
    }
    String::from_utf8(bytes).map_err(|err| malformed(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_form_encoding() {
        assert_eq!(url_encode("a b&c=d/é"), "a+b%26c%3Dd%2F%C3%A9");
        assert_eq!(url_encode("100%20"), "100%2520");
        assert_eq!(url_decode("a+b%26c").unwrap(), "a b&c");
    }

    #[test]
    fn rawurl_keeps_unreserved() {
        assert_eq!(encode("a b~c", "rawurl").unwrap(), "a%20b~c");
        assert_eq!(decode("a%20b+c", "rawurl").unwrap(), "a b+c");
    }

    #[test]
    fn base64_round_trips_unicode() {
        let encoded = encode("Été", "base64").unwrap();
        assert_eq!(encoded, "w4l0w6k=");
        assert_eq!(decode(&encoded, "BASE64").unwrap(), "Été");
    }

    #[test]
    fn html_by_name() {
        assert_eq!(encode("<b>", "html").unwrap(), "&lt;b&gt;");
        assert_eq!(decode("&lt;b&gt;", "html").unwrap(), "<b>");
    }

    #[test]
    fn uu_matches_classic_layout() {
        assert_eq!(uu_encode("test"), "$=&5S=```\n`\n");
        assert_eq!(encode("Cat", "UUENCODE").unwrap(), "#0V%T\n`\n");
        assert_eq!(uu_encode(""), "");
        assert_eq!(decode("$=&5S=```\n`\n", "uu").unwrap(), "test");
    }

    #[test]
    fn uu_splits_long_input_into_45_byte_lines() {
        let text = "é".repeat(40);
        let encoded = Encoding::Uu.encode(&text);
        let lines: Vec<&str> = encoded.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 61);
        assert!(lines[0].starts_with('M'));
        assert_eq!(lines[2], "`");
        assert_eq!(Encoding::Uu.decode(&encoded).unwrap(), text);
    }

    #[test]
    fn uu_rejects_truncated_lines() {
        assert!(matches!(
            uu_decode("$=&5\n`\n"),
            Err(TextError::Decode { encoding: "uu", .. })
        ));
        assert!(matches!(
            uu_decode("\u{7f}abc\n"),
            Err(TextError::Decode { encoding: "uu", .. })
        ));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            encode("x", "rot13"),
            Err(TextError::UnsupportedAlgorithm("rot13".into()))
        );
    }

    #[test]
    fn malformed_input_is_a_decode_error() {
        assert!(matches!(
            base64_decode("!!not base64"),
            Err(TextError::Decode { encoding: "base64", .. })
        ));
        assert!(matches!(
            url_decode("%FF%FE"),
            Err(TextError::Decode { encoding: "url", .. })
        ));
    }
}
