//! # brandguard-core
//!
//! Deterministic competitor-mention detection and sentence filtering.
//!
//! This crate provides the core check logic for Brandguard, answering:
//! - Does this text name a competitor?
//! - Which sentences are responsible?
//! - What does the corrected output look like?
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input always produces same output
//! 2. **No LLM calls**: All matching is rule-based
//! 3. **Traceable**: Every flagged sentence cites the names that matched
//!    and its byte span in the source
//! 4. **Pure**: No shared state; safe to call concurrently over
//!    disjoint texts
//!
//! ## Example
//!
//! ```rust,ignore
//! use brandguard_core::{check, CompetitorList};
//!
//! let competitors = CompetitorList::from_yaml_file("competitors.yaml")?;
//! let report = check("Acorns is popular. HSBC is global.", &competitors)?;
//!
//! assert!(report.verdict.is_flagged());
//! assert_eq!(report.filtered_text, "HSBC is global.");
//! ```

pub mod config;
pub mod filter;
pub mod matcher;
pub mod segment;

// Re-export main types at crate root
pub use config::{CompetitorList, ConfigError};
pub use filter::{check, filter, CheckReport, FlaggedSentence, Verdict};
pub use matcher::NameMatcher;
pub use segment::split_sentences;

use thiserror::Error;

/// Errors that can occur during a check.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
