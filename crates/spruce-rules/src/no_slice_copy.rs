//! Rule 145: detect full-range slice copies of sequence-typed values.
//!
//! `x[:]` on a list, tuple, or bytearray allocates a copy; `x.copy()`
//! says so directly. The rule is type-gated: it fires only when the
//! slice base is a name reference whose resolved static type is one of
//! the recognized sequence shapes, so mapping types and untyped names
//! never match.

use spruce_core::ast::{AssignStmt, DelStmt, Expr, IndexExpr, TypeSig};
use spruce_core::visit::Visit;
use spruce_core::{Diagnostic, Module, Rule};
use tracing::debug;

/// Rule code for no-slice-copy.
pub const CODE: u32 = 145;

/// Rule name for no-slice-copy.
pub const NAME: &str = "no-slice-copy";

/// Detects `x[:]` used to copy a statically-known sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSliceCopy;

impl NoSliceCopy {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoSliceCopy {
    fn code(&self) -> u32 {
        CODE
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn message(&self) -> &'static str {
        "Replace `x[:]` with `x.copy()`"
    }

    fn categories(&self) -> &'static [&'static str] {
        &["readability"]
    }

    fn explanation(&self) -> &'static str {
        "Don't use a slice expression (with no bounds) to make a copy of \
         something, use the more readable `.copy()` method instead.\n\
         \n\
         Bad:\n\
         \n\
         ```\n\
         nums = [3.1415, 1234]\n\
         copy = nums[:]\n\
         ```\n\
         \n\
         Good:\n\
         \n\
         ```\n\
         nums = [3.1415, 1234]\n\
         copy = nums.copy()\n\
         ```"
    }

    fn check(&self, module: &Module) -> Vec<Diagnostic> {
        let mut visitor = SliceCopyVisitor {
            rule: self,
            diagnostics: Vec::new(),
        };
        visitor.visit_module(module);
        visitor.diagnostics
    }
}

/// Sequence shapes recognized as copyable via `[:]`.
///
/// The literal tuple form is kept distinct from the nominal generic form
/// because front-ends emit both for tuple-typed bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SequenceKind {
    ByteArray,
    List,
    GenericTuple,
    LiteralTuple,
}

fn sequence_kind(ty: &TypeSig) -> Option<SequenceKind> {
    match ty {
        TypeSig::Instance { fullname, args } => match fullname.as_str() {
            "builtins.bytearray" => Some(SequenceKind::ByteArray),
            "builtins.list" if !args.is_empty() => Some(SequenceKind::List),
            "builtins.tuple" if !args.is_empty() => Some(SequenceKind::GenericTuple),
            _ => None,
        },
        TypeSig::Tuple(_) => Some(SequenceKind::LiteralTuple),
        TypeSig::Any => None,
    }
}

struct SliceCopyVisitor<'a> {
    rule: &'a NoSliceCopy,
    diagnostics: Vec<Diagnostic>,
}

impl<'ast> Visit<'ast> for SliceCopyVisitor<'_> {
    fn visit_assign_stmt(&mut self, node: &'ast AssignStmt) {
        // A slice as an assignment target (`x[:] = ...`) is not a copy;
        // only the right-hand side is examined.
        self.visit_expr(&node.value);
    }

    fn visit_del_stmt(&mut self, node: &'ast DelStmt) {
        // `del x[:]` clears in place, not a copy. A subscript nested
        // deeper in the deleted expression still gets normal descent.
        if !matches!(node.expr, Expr::Index(_)) {
            self.visit_expr(&node.expr);
        }
    }

    fn visit_index_expr(&mut self, node: &'ast IndexExpr) {
        let Expr::Name(base) = node.base.as_ref() else {
            return;
        };
        let Some(ty) = &base.ty else {
            return;
        };
        let Some(kind) = sequence_kind(ty) else {
            return;
        };
        if let Expr::Slice(slice) = node.index.as_ref() {
            if slice.is_full_range() {
                debug!(base = %base.name, ?kind, "full-range slice copy");
                self.diagnostics.push(self.rule.diagnostic(node.span));
            }
        }
    }
}
