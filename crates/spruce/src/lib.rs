//! # spruce
//!
//! Rule-based static-analysis engine over parsed, type-annotated syntax
//! trees. This is the facade crate: it wires the built-in rule catalogue
//! to the engine and re-exports the core types.
//!
//! An external front-end parses source text, resolves static types, and
//! hands over a [`Module`]; spruce runs the enabled rules and returns a
//! deterministically ordered diagnostic list. Rendering the diagnostics
//! is the caller's job.
//!
//! ## Quick Start
//!
//! ```ignore
//! use spruce::Selection;
//!
//! let report = spruce::run(&module, &Selection::all());
//! for diagnostic in &report.diagnostics {
//!     println!("{diagnostic}");
//! }
//! ```
//!
//! ## Selecting rules
//!
//! Rules are enabled by exact code or by category tag; unknown selectors
//! are reported in the returned [`RunReport`] without aborting the valid
//! remainder:
//!
//! ```ignore
//! let report = spruce::run(&module, &Selection::codes([145]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::sync::OnceLock;

pub use spruce_core::*;

/// Built-in rules and the catalogue constructor.
pub mod rules {
    pub use spruce_rules::*;
}

/// The process-wide registry of built-in rules, built on first use and
/// read-only thereafter.
fn builtin_registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(spruce_rules::registry)
}

/// Runs the selected built-in rules over one tree.
///
/// Pure function of its inputs: diagnostics come back sorted by
/// `(line, column, code)` regardless of rule execution order.
#[must_use]
pub fn run(module: &Module, selection: &Selection) -> RunReport {
    Engine::new(builtin_registry()).run(module, selection)
}

/// Lists the built-in rules in ascending code order, for tooling and
/// configuration UIs.
#[must_use]
pub fn list_rules() -> Vec<RuleInfo> {
    Engine::new(builtin_registry()).list_rules()
}
