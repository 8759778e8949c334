//! The check/filter operations and their report types.
//!
//! `check` segments the text, matches each sentence against the
//! competitor list, and partitions sentences into kept and flagged. The
//! corrected output is the kept sentences, original order, joined by a
//! single space. The whole pass is read-only over its inputs and keeps
//! no state between calls, so it can run concurrently over disjoint
//! texts without coordination.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::CompetitorList;
use crate::matcher::NameMatcher;
use crate::segment::split_sentences;
use crate::CheckError;

/// Outcome of a check: clean, or competitor mentions found.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Verdict {
    /// No sentence names a competitor.
    Pass,
    /// One or more sentences name competitors; the per-sentence name
    /// lists are in flag order.
    Flagged { competitors: Vec<Vec<String>> },
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    pub fn is_flagged(&self) -> bool {
        matches!(self, Verdict::Flagged { .. })
    }
}

/// A sentence removed from the output, with the names that flagged it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlaggedSentence {
    /// The sentence text as segmented (trimmed)
    pub text: String,

    /// Configured names found in the sentence, in configuration order
    pub competitors: Vec<String>,

    /// Byte offset of the sentence start in the source text
    pub start: usize,

    /// Byte offset one past the sentence end in the source text
    pub end: usize,
}

/// Full result of checking a text against a competitor list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// Pass, or flagged with the competitors found
    pub verdict: Verdict,

    /// Sentences that were removed, in source order
    pub flagged: Vec<FlaggedSentence>,

    /// The corrected output: kept sentences joined by single spaces
    pub filtered_text: String,

    /// When the check ran
    pub checked_at: DateTime<Utc>,
}

impl CheckReport {
    /// Caller-facing message when the check flagged sentences.
    ///
    /// Returns `None` on a pass.
    pub fn error_message(&self) -> Option<String> {
        match &self.verdict {
            Verdict::Pass => None,
            Verdict::Flagged { competitors } => Some(format!(
                "Found the following competitors: {:?}. \
                 Please avoid naming those competitors next time",
                competitors
            )),
        }
    }
}

/// Check a text against a competitor list.
///
/// Returns a full report: verdict, the flagged sentences with the names
/// that triggered them, and the corrected output with those sentences
/// removed.
///
/// # Errors
///
/// Fails with a configuration error if the list has no usable names or
/// a name cannot be compiled into a match pattern.
pub fn check(text: &str, list: &CompetitorList) -> Result<CheckReport, CheckError> {
    let matcher = NameMatcher::new(list)?;

    let mut flagged = Vec::new();
    let mut kept = Vec::new();
    let mut competitors_found = Vec::new();

    for sentence in split_sentences(text) {
        let found = matcher.find_in(sentence);
        if found.is_empty() {
            kept.push(sentence);
        } else {
            tracing::debug!(competitors = ?found, sentence, "flagged sentence");
            let start = offset_of(text, sentence);
            flagged.push(FlaggedSentence {
                text: sentence.to_string(),
                competitors: found.iter().map(|s| s.to_string()).collect(),
                start,
                end: start + sentence.len(),
            });
            competitors_found.push(found.iter().map(|s| s.to_string()).collect());
        }
    }

    let verdict = if flagged.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Flagged {
            competitors: competitors_found,
        }
    };

    Ok(CheckReport {
        verdict,
        flagged,
        filtered_text: kept.join(" "),
        checked_at: Utc::now(),
    })
}

/// Filter a text against a competitor list, returning only the
/// corrected output.
pub fn filter(text: &str, list: &CompetitorList) -> Result<String, CheckError> {
    Ok(check(text, list)?.filtered_text)
}

/// Byte offset of a borrowed sentence slice within its source text.
fn offset_of(source: &str, slice: &str) -> usize {
    (slice.as_ptr() as usize) - (source.as_ptr() as usize)
}
