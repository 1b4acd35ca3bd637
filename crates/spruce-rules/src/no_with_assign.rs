//! Rule 127: detect a variable declared immediately before a with-block
//! that reassigns it.
//!
//! Lookback state machine over sibling statements: only the immediately
//! preceding statement counts, and state never crosses a statement-list
//! boundary.

use spruce_core::ast::{Block, Expr, Module, Span, Stmt};
use spruce_core::visit::{self, Visit};
use spruce_core::{Diagnostic, Rule};

/// Rule code for no-with-assign.
pub const CODE: u32 = 127;

/// Rule name for no-with-assign.
pub const NAME: &str = "no-with-assign";

/// Detects a redundant declaration before a with-block reassignment.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWithAssign;

impl NoWithAssign {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoWithAssign {
    fn code(&self) -> u32 {
        CODE
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn message(&self) -> &'static str {
        "This variable is redeclared later, and can be removed here"
    }

    fn categories(&self) -> &'static [&'static str] {
        &["readability"]
    }

    fn explanation(&self) -> &'static str {
        "Scoping rules let a binding made inside a `with` block be used \
         after it, so a variable assigned in the block's sole statement \
         does not need a declaration just before the block.\n\
         \n\
         Bad:\n\
         \n\
         ```\n\
         x = \"\"\n\
         \n\
         with open(\"file.txt\") as f:\n\
         \x20   x = f.read()\n\
         ```\n\
         \n\
         Good:\n\
         \n\
         ```\n\
         with open(\"file.txt\") as f:\n\
         \x20   x = f.read()\n\
         ```"
    }

    fn check(&self, module: &Module) -> Vec<Diagnostic> {
        let mut visitor = WithAssignVisitor {
            rule: self,
            diagnostics: Vec::new(),
        };
        visitor.visit_module(module);
        visitor.diagnostics
    }
}

/// One-statement-of-lookback state, threaded through each list walk.
#[derive(Debug, Clone, Copy)]
enum Lookback<'ast> {
    Idle,
    Pending { fullname: &'ast str, span: Span },
}

struct WithAssignVisitor<'a> {
    rule: &'a NoWithAssign,
    diagnostics: Vec<Diagnostic>,
}

impl WithAssignVisitor<'_> {
    /// Runs the state machine over one statement list. Initial state is
    /// `Idle`; an intervening non-assignment statement always clears the
    /// pending slot.
    fn check_statements(&mut self, body: &[Stmt]) {
        let mut state = Lookback::Idle;

        for stmt in body {
            if let Lookback::Pending { fullname, span } = state {
                if let Stmt::With(with) = stmt {
                    if let [Stmt::Assign(assign)] = with.body.body.as_slice() {
                        if let [Expr::Name(target)] = assign.targets.as_slice() {
                            if target.fullname == fullname {
                                self.diagnostics.push(self.rule.diagnostic(span));
                            }
                        }
                    }
                }
            }

            state = match stmt {
                Stmt::Assign(assign) => match assign.targets.as_slice() {
                    [Expr::Name(target)] => Lookback::Pending {
                        fullname: &target.fullname,
                        span: assign.span,
                    },
                    _ => Lookback::Idle,
                },
                _ => Lookback::Idle,
            };
        }
    }
}

impl<'ast> Visit<'ast> for WithAssignVisitor<'_> {
    fn visit_module(&mut self, node: &'ast Module) {
        self.check_statements(&node.body);
        visit::visit_module(self, node);
    }

    fn visit_block(&mut self, node: &'ast Block) {
        self.check_statements(&node.body);
        visit::visit_block(self, node);
    }
}
