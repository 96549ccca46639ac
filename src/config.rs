//! YAML configuration for the toolkit defaults.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//!
//! list:
//!   delimiter: ","
//!
//! wrap:
//!   width: 75
//!   break_token: "\n"
//!   max_lines: null
//!   truncation_suffix: ""
//!
//! slug:
//!   transliterations:
//!     "ß": "ss"
//!     "&": " and "
//!
//! number:
//!   decimals: 2
//!   thousand_sep: " "
//!   decimal_sep: "."
//! ```
//!
//! Every section is optional and falls back to the defaults shown above.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use delimited::DelimitedList;
use serde::{Deserialize, Serialize};
use text::{TransliterationTable, WrapOptions};
use thiserror::Error;
use tracing::debug;

use crate::number::format_number;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ToolkitConfig {
    pub version: String,

    #[serde(default)]
    pub list: ListConfig,

    #[serde(default)]
    pub wrap: WrapConfig,

    #[serde(default)]
    pub slug: SlugConfig,

    #[serde(default)]
    pub number: NumberConfig,
}

impl ToolkitConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading_toolkit_config");
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: ToolkitConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.list.validate()?;
        self.wrap.validate()?;
        self.slug.validate()?;
        Ok(())
    }

    /// Built-in French table with the configured overrides applied.
    pub fn transliteration_table(&self) -> TransliterationTable {
        let mut table = TransliterationTable::french().clone();
        table.extend(self.slug.transliterations.iter().filter_map(|(from, to)| {
            single_char(from).map(|c| (c, to.clone()))
        }));
        table
    }

    pub fn wrap_options(&self) -> WrapOptions {
        WrapOptions {
            break_token: self.wrap.break_token.clone(),
            max_lines: self.wrap.max_lines,
            truncation_suffix: self.wrap.truncation_suffix.clone(),
        }
    }

    /// `input` read with the configured delimiter.
    pub fn list(&self, input: impl Into<String>) -> DelimitedList {
        DelimitedList::with_delimiter(input, self.list.delimiter.clone())
    }

    pub fn format_number(&self, value: f64) -> String {
        format_number(
            value,
            self.number.decimals,
            &self.number.thousand_sep,
            &self.number.decimal_sep,
        )
    }

    /// Wraps `text` at the configured width with the configured options.
    pub fn word_wrap(&self, input: &str) -> String {
        text::word_wrap(input, self.wrap.width, &self.wrap_options())
    }
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            list: ListConfig::default(),
            wrap: WrapConfig::default(),
            slug: SlugConfig::default(),
            number: NumberConfig::default(),
        }
    }
}

fn single_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConfig {
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

impl ListConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.delimiter.is_empty() {
            return Err(ConfigLoadError::Validation(
                "list.delimiter must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapConfig {
    #[serde(default = "default_width")]
    pub width: usize,

    #[serde(default = "default_break_token")]
    pub break_token: String,

    #[serde(default)]
    pub max_lines: Option<usize>,

    #[serde(default)]
    pub truncation_suffix: String,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            break_token: default_break_token(),
            max_lines: None,
            truncation_suffix: String::new(),
        }
    }
}

impl WrapConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.width == 0 {
            return Err(ConfigLoadError::Validation(
                "wrap.width must be greater than 0".to_string(),
            ));
        }
        if self.max_lines == Some(0) {
            return Err(ConfigLoadError::Validation(
                "wrap.max_lines must be greater than 0 when set".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugConfig {
    /// Single-character keys mapped to their replacement.
    #[serde(default)]
    pub transliterations: HashMap<String, String>,
}

impl SlugConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if let Some(bad) = self
            .transliterations
            .keys()
            .find(|key| single_char(key).is_none())
        {
            return Err(ConfigLoadError::Validation(format!(
                "slug.transliterations key {bad:?} must be exactly one character"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberConfig {
    #[serde(default = "default_decimals")]
    pub decimals: usize,

    #[serde(default = "default_thousand_sep")]
    pub thousand_sep: String,

    #[serde(default = "default_decimal_sep")]
    pub decimal_sep: String,
}

impl Default for NumberConfig {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
            thousand_sep: default_thousand_sep(),
            decimal_sep: default_decimal_sep(),
        }
    }
}

fn default_delimiter() -> String {
    delimited::DEFAULT_DELIMITER.to_string()
}

fn default_width() -> usize {
    75
}

fn default_break_token() -> String {
    "\n".to_string()
}

fn default_decimals() -> usize {
    2
}

fn default_thousand_sep() -> String {
    " ".to_string()
}

fn default_decimal_sep() -> String {
    ".".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
version: "1.0"
list:
  delimiter: ";"
wrap:
  width: 10
  break_token: "<br>"
  max_lines: 1
  truncation_suffix: "..."
slug:
  transliterations:
    "&": " and "
number:
  decimals: 1
  thousand_sep: "."
  decimal_sep: ","
"#;

    #[test]
    fn minimal_config_uses_defaults() {
        let config = ToolkitConfig::from_yaml("version: \"1.0\"").unwrap();
        assert_eq!(config, ToolkitConfig::default());
        assert_eq!(config.wrap_options(), WrapOptions::default());
        assert_eq!(config.list.delimiter, ",");
    }

    #[test]
    fn full_config_drives_every_component() {
        let config = ToolkitConfig::from_yaml(FULL).unwrap();
        assert_eq!(config.list("a;b").len(), 2);
        assert_eq!(config.word_wrap("The quick brown fox"), "The quick...");
        assert_eq!(config.format_number(1234.56), "1.234,6");

        let table = config.transliteration_table();
        let slugifier = text::Slugifier::new(&table);
        assert_eq!(slugifier.slugify("Tom & Jerry"), "tom-and-jerry");
        assert_eq!(slugifier.slugify("Œuf"), "oeuf");
    }

    #[test]
    fn invalid_configs_are_rejected() {
        assert!(matches!(
            ToolkitConfig::from_yaml("version: \"2.0\""),
            Err(ConfigLoadError::UnsupportedVersion(v)) if v == "2.0"
        ));
        assert!(matches!(
            ToolkitConfig::from_yaml("version: \"1\"\nwrap:\n  width: 0"),
            Err(ConfigLoadError::Validation(_))
        ));
        assert!(matches!(
            ToolkitConfig::from_yaml("version: \"1\"\nslug:\n  transliterations:\n    ab: x"),
            Err(ConfigLoadError::Validation(_))
        ));
        assert!(matches!(
            ToolkitConfig::from_yaml("version: [1"),
            Err(ConfigLoadError::YamlParse(_))
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        assert!(matches!(
            ToolkitConfig::from_file("/nonexistent/normkit.yaml"),
            Err(ConfigLoadError::FileRead(_))
        ));
    }
}
