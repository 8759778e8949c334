//! Word-boundary matching for competitor names.
//!
//! Each configured name compiles to one regex: the literal name,
//! escaped, anchored with `\b` on every edge that starts or ends with a
//! word character. The anchoring is what keeps "Chase" from matching
//! inside "Chaseton"; edges that are not word characters (as in
//! "E*TRADE") get no anchor, since `\b` would invert its meaning there.

use regex::Regex;

use crate::config::{CompetitorList, ConfigError};

/// A compiled matcher over a competitor list.
///
/// Compile once, match many: compilation walks the list a single time,
/// and `find_in` is then read-only and safe to share across threads.
#[derive(Debug)]
pub struct NameMatcher {
    entries: Vec<NameEntry>,
}

#[derive(Debug)]
struct NameEntry {
    name: String,
    pattern: Regex,
}

impl NameMatcher {
    /// Compile a matcher from a competitor list.
    pub fn new(list: &CompetitorList) -> Result<Self, ConfigError> {
        let mut entries = Vec::new();
        for name in list.usable_names() {
            let pattern = Regex::new(&boundary_pattern(name, list.case_insensitive)).map_err(
                |source| ConfigError::PatternError {
                    name: name.to_string(),
                    source,
                },
            )?;
            entries.push(NameEntry {
                name: name.to_string(),
                pattern,
            });
        }
        // Guards lists built in code that skipped parse-time validation;
        // an empty matcher would silently pass every sentence.
        if entries.is_empty() {
            return Err(ConfigError::NoCompetitors);
        }
        Ok(Self { entries })
    }

    /// Configured names found in the text, in configuration order.
    ///
    /// Overlapping names ("JP Morgan" and "JP Morgan Chase") are
    /// reported independently; one sentence can match both.
    pub fn find_in(&self, text: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.pattern.is_match(text))
            .map(|entry| entry.name.as_str())
            .collect()
    }

    /// Whether the text names any configured competitor.
    pub fn is_match(&self, text: &str) -> bool {
        self.entries.iter().any(|entry| entry.pattern.is_match(text))
    }
}

/// Build the anchored pattern for one name.
fn boundary_pattern(name: &str, case_insensitive: bool) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let left = if name.chars().next().is_some_and(is_word) {
        r"\b"
    } else {
        ""
    };
    let right = if name.chars().last().is_some_and(is_word) {
        r"\b"
    } else {
        ""
    };
    let flags = if case_insensitive { "(?i)" } else { "" };
    format!("{}{}{}{}", flags, left, regex::escape(name), right)
}
