//! Competitor list parsing from YAML/JSON.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::schema::validate_list_schema;

/// Errors that can occur when building or parsing a competitor list.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read competitor file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Competitor list failed schema validation: {0}")]
    SchemaError(String),

    #[error("no competitor names provided")]
    NoCompetitors,

    #[error("Failed to compile match pattern for {name:?}: {source}")]
    PatternError {
        name: String,
        source: regex::Error,
    },
}

/// A configured set of competitor names to detect and remove.
///
/// Matching is literal on the configured forms: list every variant of a
/// name that should trigger removal (e.g. both "JP Morgan" and
/// "JP Morgan Chase"), including possessives and abbreviations. The
/// original casing of each entry is preserved and reported on a match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompetitorList {
    /// Competitor names and aliases, in reporting order
    pub competitors: Vec<String>,

    /// Match names ignoring letter case (default: exact case)
    #[serde(default)]
    pub case_insensitive: bool,
}

impl CompetitorList {
    /// Build a case-sensitive list from an iterator of names.
    pub fn new<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = Self {
            competitors: names.into_iter().map(Into::into).collect(),
            case_insensitive: false,
        };
        list.validate()?;
        Ok(list)
    }

    /// Parse a competitor list from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_yaml::from_str(yaml)?;
        Self::from_value(value)
    }

    /// Parse a competitor list from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parse a competitor list from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse a competitor list from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Schema-validate and deserialize a parsed value.
    fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        validate_list_schema(&value)
            .map_err(|errors| ConfigError::SchemaError(errors.join("; ")))?;
        let list: CompetitorList = serde_json::from_value(value)?;
        list.validate()?;
        Ok(list)
    }

    /// Validate the list contents.
    ///
    /// An empty list, or one whose every entry is blank, is a
    /// configuration error: it would silently pass all text through
    /// and mask the mistake.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.usable_names().next().is_none() {
            return Err(ConfigError::NoCompetitors);
        }
        Ok(())
    }

    /// Names with matchable content, in configuration order.
    ///
    /// Blank entries are skipped; they carry no matchable text.
    pub fn usable_names(&self) -> impl Iterator<Item = &str> {
        self.competitors.iter().filter_map(|name| {
            if name.trim().is_empty() {
                tracing::warn!(entry = ?name, "skipping blank competitor entry");
                None
            } else {
                Some(name.as_str())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_LIST: &str = r#"
competitors:
  - Acorns
  - Citigroup
  - Citi
  - JP Morgan
case_insensitive: false
"#;

    #[test]
    fn test_parse_valid_list() {
        let list = CompetitorList::from_yaml(VALID_LIST).unwrap();
        assert_eq!(list.competitors.len(), 4);
        assert_eq!(list.competitors[0], "Acorns");
        assert!(!list.case_insensitive);
    }

    #[test]
    fn test_parse_json_list() {
        let list =
            CompetitorList::from_json(r#"{"competitors": ["Acme"], "case_insensitive": true}"#)
                .unwrap();
        assert_eq!(list.competitors, vec!["Acme"]);
        assert!(list.case_insensitive);
    }

    #[test]
    fn test_empty_list_rejected() {
        let result = CompetitorList::new(Vec::<String>::new());
        assert!(matches!(result, Err(ConfigError::NoCompetitors)));
    }

    #[test]
    fn test_blank_only_list_rejected() {
        let result = CompetitorList::new(vec!["", "   ", "\t"]);
        assert!(matches!(result, Err(ConfigError::NoCompetitors)));
    }

    #[test]
    fn test_blank_entries_skipped_among_usable() {
        let list = CompetitorList::new(vec!["Acme", "", "Globex"]).unwrap();
        let usable: Vec<&str> = list.usable_names().collect();
        assert_eq!(usable, vec!["Acme", "Globex"]);
    }

    #[test]
    fn test_schema_rejects_missing_competitors() {
        let result = CompetitorList::from_yaml("case_insensitive: true");
        assert!(matches!(result, Err(ConfigError::SchemaError(_))));
    }

    #[test]
    fn test_schema_rejects_unknown_field() {
        let result = CompetitorList::from_yaml("competitors: [Acme]\nfuzzy: true");
        assert!(matches!(result, Err(ConfigError::SchemaError(_))));
    }

    #[test]
    fn test_no_competitors_message_names_the_condition() {
        let err = CompetitorList::new(Vec::<String>::new()).unwrap_err();
        assert_eq!(err.to_string(), "no competitor names provided");
    }
}
