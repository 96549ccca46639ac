use std::collections::HashMap;

use once_cell::sync::Lazy;
use unicode_normalization::char::decompose_compatible;

/// Explicit character → ASCII replacement table.
///
/// Characters found in the table are replaced first. Anything else that is
/// not ASCII is decomposed (NFKD) and only its ASCII parts are kept, so `é`
/// becomes `e` and a character with no ASCII part disappears.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransliterationTable {
    map: HashMap<char, String>,
}

static FRENCH: Lazy<TransliterationTable> = Lazy::new(|| {
    let entries: &[(char, &str)] = &[
        ('Œ', "OE"),
        ('œ', "oe"),
        ('Æ', "AE"),
        ('æ', "ae"),
        ('ß', "ss"),
        ('Ø', "O"),
        ('ø', "o"),
        ('Ð', "D"),
        ('ð', "d"),
        ('Þ', "TH"),
        ('þ', "th"),
        ('Ł', "L"),
        ('ł', "l"),
        // elision apostrophes separate words: l'été -> l ete
        ('\'', " "),
        ('\u{2019}', " "),
        ('\u{2018}', " "),
        ('\u{02BC}', " "),
        ('«', "\""),
        ('»', "\""),
        ('\u{201C}', "\""),
        ('\u{201D}', "\""),
        ('\u{201E}', "\""),
        ('\u{2013}', "-"),
        ('\u{2014}', "-"),
        ('\u{2026}', "..."),
        ('\u{00A0}', " "),
        ('\u{202F}', " "),
        ('€', "EUR"),
        ('£', "GBP"),
        ('©', "(C)"),
        ('®', "(R)"),
        ('°', "o"),
    ];
    entries.iter().map(|&(c, r)| (c, r.to_string())).collect()
});

impl TransliterationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in French table, built once per process.
    pub fn french() -> &'static TransliterationTable {
        &FRENCH
    }

    pub fn insert(&mut self, from: char, to: impl Into<String>) -> Option<String> {
        self.map.insert(from, to.into())
    }

    pub fn with(mut self, from: char, to: impl Into<String>) -> Self {
        self.insert(from, to);
        self
    }

    pub fn get(&self, c: char) -> Option<&str> {
        self.map.get(&c).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Maps `text` to ASCII, dropping what cannot be approximated.
    pub fn transliterate(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if let Some(replacement) = self.get(c) {
                out.push_str(replacement);
            } else if c.is_ascii() {
                out.push(c);
            } else {
                decompose_compatible(c, |part| {
                    if part.is_ascii() {
                        out.push(part);
                    }
                });
            }
        }
        out
    }
}

impl FromIterator<(char, String)> for TransliterationTable {
    fn from_iter<I: IntoIterator<Item = (char, String)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

impl Extend<(char, String)> for TransliterationTable {
    fn extend<I: IntoIterator<Item = (char, String)>>(&mut self, iter: I) {
        self.map.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accents_decompose_to_base_letters() {
        let table = TransliterationTable::new();
        assert_eq!(table.transliterate("Crème brûlée à Noël"), "Creme brulee a Noel");
    }

    #[test]
    fn unmapped_symbols_are_dropped() {
        let table = TransliterationTable::new();
        assert_eq!(table.transliterate("a→b 日本"), "ab ");
    }

    #[test]
    fn french_table_covers_ligatures_and_quotes() {
        let table = TransliterationTable::french();
        assert_eq!(table.transliterate("Œuvre «cœur»"), "OEuvre \"coeur\"");
        assert_eq!(table.transliterate("l’été"), "l ete");
        assert_eq!(table.transliterate("5 €"), "5 EUR");
    }

    #[test]
    fn overrides_take_precedence() {
        let table = TransliterationTable::french().clone().with('ß', "sz");
        assert_eq!(table.transliterate("Straße"), "Strasze");
    }

    #[test]
    fn compatibility_forms_fold() {
        let table = TransliterationTable::new();
        assert_eq!(table.transliterate("ﬁne ①"), "fine 1");
    }
}
