//! Interactive survey form
//!
//! This module implements the `prompt` demo: a short multi-field form
//! declared as a list of field descriptors, each carrying its own
//! validation rule. The same descriptor list drives both rendering modes —
//! full interactive widgets, and an accessible line-based mode for
//! environments where ANSI rendering is undesirable.

pub mod form;
pub mod runner;

pub use form::run_accessible;
pub use runner::run_survey;

/// Values collected from the survey form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyResult {
    /// Free-text name, trimmed, never empty
    pub name: String,
    /// One of [`crate::constants::survey::LANGUAGES`]
    pub favorite_language: String,
    /// Newsletter confirmation, defaults to false
    pub newsletter_opt_in: bool,
}
