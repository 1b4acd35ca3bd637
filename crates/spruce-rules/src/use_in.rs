//! Rule 108: detect `x == y or x == z` chains that should be `x in (y, z)`.
//!
//! Operand identity is structural: the two left-hand sides must render to
//! the same canonical textual form. No purity analysis is attempted, so
//! the suggestion is only sound for constant-style comparisons; that
//! limitation is documented, not checked.

use spruce_core::ast::{BoolOp, BoolOpExpr, CmpOp, ComparisonExpr, Expr};
use spruce_core::visit::{self, Visit};
use spruce_core::{Diagnostic, Module, Rule};

/// Rule code for use-in.
pub const CODE: u32 = 108;

/// Rule name for use-in.
pub const NAME: &str = "use-in";

/// Detects repeated equality checks joined by `or`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UseIn;

impl UseIn {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for UseIn {
    fn code(&self) -> u32 {
        CODE
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn message(&self) -> &'static str {
        "Use `x in (y, z)` instead of `x == y or x == z`"
    }

    fn categories(&self) -> &'static [&'static str] {
        &["logical", "readability"]
    }

    fn explanation(&self) -> &'static str {
        "When comparing a value to multiple possible options, don't chain \
         `or` checks, use a single membership test:\n\
         \n\
         Bad:\n\
         \n\
         ```\n\
         if x == \"abc\" or x == \"def\":\n\
         \x20   pass\n\
         ```\n\
         \n\
         Good:\n\
         \n\
         ```\n\
         if x in (\"abc\", \"def\"):\n\
         \x20   pass\n\
         ```\n\
         \n\
         Note: not applicable when the operands depend on boolean \
         short-circuiting, since membership operands are eagerly \
         evaluated. Primarily useful against a range of constant values."
    }

    fn check(&self, module: &Module) -> Vec<Diagnostic> {
        let mut visitor = UseInVisitor {
            rule: self,
            diagnostics: Vec::new(),
        };
        visitor.visit_module(module);
        visitor.diagnostics
    }
}

/// A comparison with exactly one `==` between two operands.
fn single_equality(cmp: &ComparisonExpr) -> bool {
    matches!(cmp.operators.as_slice(), [CmpOp::Eq]) && cmp.operands.len() == 2
}

/// True for `a == y or a == z` with identical textual `a`.
fn joins_repeated_equality(node: &BoolOpExpr) -> bool {
    if node.op != BoolOp::Or {
        return false;
    }
    let (Expr::Comparison(left), Expr::Comparison(right)) =
        (node.left.as_ref(), node.right.as_ref())
    else {
        return false;
    };
    single_equality(left)
        && single_equality(right)
        && left.operands[0].to_string() == right.operands[0].to_string()
}

struct UseInVisitor<'a> {
    rule: &'a UseIn,
    diagnostics: Vec<Diagnostic>,
}

impl<'ast> Visit<'ast> for UseInVisitor<'_> {
    fn visit_bool_op_expr(&mut self, node: &'ast BoolOpExpr) {
        if joins_repeated_equality(node) {
            self.diagnostics.push(self.rule.diagnostic(node.span));
        }
        // A 3+-term chain never matches at its outermost node (its left
        // operand is itself an `or`), but descending still catches the
        // adjacent pair at the inner node.
        visit::visit_bool_op_expr(self, node);
    }
}
