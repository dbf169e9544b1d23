//! Degradation reporting.
//!
//! The parser never fails. When a construct is malformed it falls back to the
//! most literal representation and records a [`Degradation`] here so callers
//! can see what was downgraded.

use thiserror::Error;

/// A fallback applied while building the tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Degradation {
    /// A code fence with no closing fence before the end of its text.
    #[error("unterminated code fence{}; kept as literal text", language_suffix(.language))]
    UnterminatedFence { language: Option<String> },

    /// A table header followed by a malformed separator row.
    #[error("invalid table separator row `{separator}`; kept as paragraph")]
    InvalidTableSeparator { separator: String },

    /// An inline opener with no closer in the same text.
    #[error("unmatched `{delimiter}` kept as literal text")]
    UnmatchedDelimiter { delimiter: String },

    /// Containers or inline spans nested past the parser's depth limit.
    #[error("nesting deeper than {limit} levels; kept as literal text")]
    NestingTooDeep { limit: usize },

    /// Empty or whitespace-only input.
    #[error("empty input produced an empty document")]
    EmptyInput,
}

fn language_suffix(language: &Option<String>) -> String {
    language
        .as_deref()
        .map(|l| format!(" ({l})"))
        .unwrap_or_default()
}

/// Per-call collector threaded through the builders.
#[derive(Debug, Default)]
pub struct Diagnostics {
    degradations: Vec<Degradation>,
}

impl Diagnostics {
    pub fn record(&mut self, degradation: Degradation) {
        log::debug!("{degradation}");
        self.degradations.push(degradation);
    }

    pub fn degradations(&self) -> &[Degradation] {
        &self.degradations
    }

    pub fn into_degradations(self) -> Vec<Degradation> {
        self.degradations
    }
}
