//! Competitor list parsing and validation.
//!
//! Competitor lists are structured data validated against JSON Schema.
//! This module handles parsing YAML/JSON lists and validating them.

mod parser;
mod schema;

pub use parser::{CompetitorList, ConfigError};
