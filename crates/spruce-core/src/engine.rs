//! The engine orchestrating rule execution over one tree.

use crate::ast::Module;
use crate::registry::{Registry, Selection, SelectionError};
use crate::types::{Collector, Diagnostic, RuleInfo};
use tracing::{debug, info, warn};

/// Result of one engine run.
#[derive(Debug)]
pub struct RunReport {
    /// Findings, sorted by `(line, column, code)`.
    pub diagnostics: Vec<Diagnostic>,
    /// Configuration errors from unknown selectors. The valid remainder
    /// of the selection still ran.
    pub invalid_selectors: Vec<SelectionError>,
}

impl RunReport {
    /// True when the run produced no findings.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Runs enabled rules over trees handed in by the front-end.
///
/// The engine is a pure function of its inputs: the same tree and
/// selection always produce the same report, and the final ordering is
/// independent of the order rules execute in.
pub struct Engine<'r> {
    registry: &'r Registry,
}

impl<'r> Engine<'r> {
    /// Creates an engine over a registry.
    #[must_use]
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Applies the selected rules to one tree.
    #[must_use]
    pub fn run(&self, module: &Module, selection: &Selection) -> RunReport {
        let (rules, invalid_selectors) = self.registry.select(selection);

        for error in &invalid_selectors {
            warn!("ignoring selector: {error}");
        }

        info!(
            module = %module.name,
            rules = rules.len(),
            "starting lint run"
        );

        let mut collector = Collector::new();
        for rule in rules {
            let findings = rule.check(module);
            debug!(rule = rule.name(), findings = findings.len(), "rule done");
            collector.extend(findings);
        }

        let diagnostics = collector.finish();
        info!(
            module = %module.name,
            diagnostics = diagnostics.len(),
            "lint run complete"
        );

        RunReport {
            diagnostics,
            invalid_selectors,
        }
    }

    /// Catalogue of registered rules, ascending by code.
    #[must_use]
    pub fn list_rules(&self) -> Vec<RuleInfo> {
        self.registry.infos()
    }
}
