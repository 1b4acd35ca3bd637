//! Diagnostic types and the append-only collector.

use crate::ast::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A finding produced by a rule.
///
/// Field meanings are stable for downstream consumers; rendering to text
/// or structured output is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Rule code (e.g., 145).
    pub code: u32,
    /// Rule name (e.g., "no-slice-copy").
    pub rule: String,
    /// Human-readable message.
    pub message: String,
    /// Category tags of the producing rule.
    pub categories: Vec<String>,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(
        code: u32,
        rule: impl Into<String>,
        message: impl Into<String>,
        categories: &[&str],
        span: Span,
    ) -> Self {
        Self {
            code,
            rule: rule.into(),
            message: message.into(),
            categories: categories.iter().map(ToString::to_string).collect(),
            line: span.line,
            column: span.column,
        }
    }

    /// Sort key giving the deterministic output order.
    #[must_use]
    pub fn sort_key(&self) -> (usize, usize, u32) {
        (self.line, self.column, self.code)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} [{}] {}",
            self.line, self.column, self.code, self.message
        )
    }
}

/// Append-only sink merging the findings of all rules.
///
/// Diagnostics are never retracted once pushed; [`Collector::finish`]
/// sorts by `(line, column, code)` so the final list is independent of
/// rule execution order.
#[derive(Debug, Default)]
pub struct Collector {
    diagnostics: Vec<Diagnostic>,
}

impl Collector {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Appends a batch of diagnostics from one rule.
    pub fn extend(&mut self, diagnostics: Vec<Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    /// Number of diagnostics collected so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// True when nothing has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Sorts and returns the final diagnostic list.
    #[must_use]
    pub fn finish(mut self) -> Vec<Diagnostic> {
        self.diagnostics.sort_by_key(Diagnostic::sort_key);
        self.diagnostics
    }
}

/// Catalogue entry describing one rule, for tooling and config UIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleInfo {
    /// Rule code.
    pub code: u32,
    /// Rule name.
    pub name: String,
    /// Message template emitted by the rule.
    pub message: String,
    /// Category tags.
    pub categories: Vec<String>,
    /// Documentation text with before/after examples. Descriptive only,
    /// never parsed for matching.
    pub explanation: String,
}
