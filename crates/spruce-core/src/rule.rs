//! The `Rule` trait for defining lint rules.

use crate::ast::{Module, Span};
use crate::types::{Diagnostic, RuleInfo};

/// A pattern-matching lint rule over one syntax tree.
///
/// Rules are pure with respect to the tree: they never mutate it, carry no
/// state across trees, and communicate only through returned diagnostics.
/// A rule that does not recognize a node's shape yields no diagnostic for
/// it; "no match" is never an error path.
///
/// # Example
///
/// ```ignore
/// use spruce_core::{Diagnostic, Module, Rule};
/// use spruce_core::visit::Visit;
///
/// pub struct NoSliceCopy;
///
/// impl Rule for NoSliceCopy {
///     fn code(&self) -> u32 { 145 }
///     fn name(&self) -> &'static str { "no-slice-copy" }
///     fn message(&self) -> &'static str { "Replace `x[:]` with `x.copy()`" }
///     fn categories(&self) -> &'static [&'static str] { &["readability"] }
///
///     fn check(&self, module: &Module) -> Vec<Diagnostic> {
///         let mut visitor = SliceCopyVisitor::new(self);
///         visitor.visit_module(module);
///         visitor.diagnostics
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Unique positive rule code (e.g., 145).
    fn code(&self) -> u32;

    /// Unique kebab-case rule name (e.g., "no-slice-copy").
    fn name(&self) -> &'static str;

    /// Message template for diagnostics emitted by this rule.
    fn message(&self) -> &'static str;

    /// Category tags for enable/disable grouping.
    fn categories(&self) -> &'static [&'static str];

    /// Documentation text with before/after examples.
    fn explanation(&self) -> &'static str {
        ""
    }

    /// Checks one tree and returns the findings, unordered.
    fn check(&self, module: &Module) -> Vec<Diagnostic>;

    /// Builds a diagnostic for this rule at the given position.
    fn diagnostic(&self, span: Span) -> Diagnostic {
        Diagnostic::new(self.code(), self.name(), self.message(), self.categories(), span)
    }

    /// Catalogue entry for this rule.
    fn info(&self) -> RuleInfo {
        RuleInfo {
            code: self.code(),
            name: self.name().to_string(),
            message: self.message().to_string(),
            categories: self.categories().iter().map(ToString::to_string).collect(),
            explanation: self.explanation().to_string(),
        }
    }
}

/// Type alias for boxed `Rule` trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Span;

    struct TestRule;

    impl Rule for TestRule {
        fn code(&self) -> u32 {
            999
        }
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn message(&self) -> &'static str {
            "A test finding"
        }
        fn categories(&self) -> &'static [&'static str] {
            &["testing"]
        }

        fn check(&self, _module: &Module) -> Vec<Diagnostic> {
            vec![self.diagnostic(Span::new(1, 1))]
        }
    }

    #[test]
    fn diagnostic_helper_copies_rule_identity() {
        let rule = TestRule;
        let d = rule.diagnostic(Span::new(7, 3));
        assert_eq!(d.code, 999);
        assert_eq!(d.rule, "test-rule");
        assert_eq!(d.message, "A test finding");
        assert_eq!(d.categories, ["testing"]);
        assert_eq!((d.line, d.column), (7, 3));
    }

    #[test]
    fn info_mirrors_rule_metadata() {
        let info = TestRule.info();
        assert_eq!(info.code, 999);
        assert_eq!(info.name, "test-rule");
        assert!(info.explanation.is_empty());
    }
}
