//! Syntax tree model consumed by the lint engine.
//!
//! The tree is produced by an external front-end (parser + type resolver)
//! and is read-only for the engine's lifetime. Node kinds form a closed
//! tagged union; every node carries a mandatory [`Span`], so a tree without
//! position data cannot be constructed. Bindable name references optionally
//! carry a resolved [`TypeSig`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source position of a node, 1-based line and column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Span {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Resolved static type of a bindable symbol.
///
/// Structured descriptor rather than a bare string: rules match against
/// node shapes, not textual prefixes. The literal fixed-length tuple form
/// (`tuple[int, str]`) is kept distinct from the nominal generic form
/// (`builtins.tuple[int, ...]`) because front-ends emit both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeSig {
    /// Nominal type instance, e.g. `builtins.list[int]`.
    Instance {
        /// Fully-qualified type name, e.g. `builtins.list`.
        fullname: String,
        /// Type arguments, empty for non-generic types.
        args: Vec<TypeSig>,
    },
    /// Literal fixed-length tuple form, e.g. `tuple[int, str]`.
    Tuple(Vec<TypeSig>),
    /// Unknown or unconstrained type.
    Any,
}

impl TypeSig {
    /// Creates a nominal instance type.
    #[must_use]
    pub fn instance(fullname: impl Into<String>, args: Vec<TypeSig>) -> Self {
        Self::Instance {
            fullname: fullname.into(),
            args,
        }
    }
}

impl fmt::Display for TypeSig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instance { fullname, args } => {
                write!(f, "{fullname}")?;
                if !args.is_empty() {
                    write!(f, "[")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    write!(f, "]")?;
                }
                Ok(())
            }
            Self::Tuple(items) => {
                write!(f, "tuple[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Any => write!(f, "Any"),
        }
    }
}

/// One source unit (a module) handed over by the front-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// Module name, e.g. `pkg.mod`.
    pub name: String,
    /// Top-level statement list.
    pub body: Vec<Stmt>,
}

impl Module {
    /// Creates a module from its top-level statements.
    #[must_use]
    pub fn new(name: impl Into<String>, body: Vec<Stmt>) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }
}

/// A statement list nested inside a compound statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Statements in source order.
    pub body: Vec<Stmt>,
}

impl Block {
    /// Creates a block.
    #[must_use]
    pub fn new(body: Vec<Stmt>) -> Self {
        Self { body }
    }
}

/// Statement node kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    /// Assignment statement, `a = v` (or multi-target `a = b = v`).
    Assign(AssignStmt),
    /// Deletion statement, `del x`.
    Del(DelStmt),
    /// Scoped-resource block, `with open(f) as fp: ...`.
    With(WithStmt),
    /// Conditional, `if t: ... else: ...`.
    If(IfStmt),
    /// Function definition.
    FuncDef(FuncDef),
    /// Bare expression statement.
    Expr(ExprStmt),
    /// `pass`.
    Pass(PassStmt),
}

impl Stmt {
    /// Returns the statement's source position.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Assign(s) => s.span,
            Self::Del(s) => s.span,
            Self::With(s) => s.span,
            Self::If(s) => s.span,
            Self::FuncDef(s) => s.span,
            Self::Expr(s) => s.span,
            Self::Pass(s) => s.span,
        }
    }
}

/// Assignment statement: ordered target list plus one value expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignStmt {
    /// Position of the statement.
    pub span: Span,
    /// Assignment targets in source order.
    pub targets: Vec<Expr>,
    /// Right-hand side.
    pub value: Expr,
}

impl AssignStmt {
    /// Creates a single-target assignment.
    #[must_use]
    pub fn new(span: Span, target: Expr, value: Expr) -> Self {
        Self {
            span,
            targets: vec![target],
            value,
        }
    }
}

/// Deletion statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelStmt {
    /// Position of the statement.
    pub span: Span,
    /// Expression being deleted.
    pub expr: Expr,
}

impl DelStmt {
    /// Creates a deletion statement.
    #[must_use]
    pub fn new(span: Span, expr: Expr) -> Self {
        Self { span, expr }
    }
}

/// Scoped-resource (`with`-style) block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithStmt {
    /// Position of the statement.
    pub span: Span,
    /// Context managers entered by this block.
    pub items: Vec<WithItem>,
    /// Block body.
    pub body: Block,
}

impl WithStmt {
    /// Creates a with-block with a single context item.
    #[must_use]
    pub fn new(span: Span, item: WithItem, body: Block) -> Self {
        Self {
            span,
            items: vec![item],
            body,
        }
    }
}

/// One `expr as target` item of a with-block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithItem {
    /// Context-manager expression.
    pub context: Expr,
    /// Optional `as` target.
    pub target: Option<Expr>,
}

impl WithItem {
    /// Creates an item without an `as` target.
    #[must_use]
    pub fn new(context: Expr) -> Self {
        Self {
            context,
            target: None,
        }
    }

    /// Sets the `as` target.
    #[must_use]
    pub fn with_target(mut self, target: Expr) -> Self {
        self.target = Some(target);
        self
    }
}

/// Conditional statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStmt {
    /// Position of the statement.
    pub span: Span,
    /// Condition expression.
    pub test: Expr,
    /// Then-branch block.
    pub body: Block,
    /// Optional else-branch block.
    pub orelse: Option<Block>,
}

impl IfStmt {
    /// Creates a conditional without an else branch.
    #[must_use]
    pub fn new(span: Span, test: Expr, body: Block) -> Self {
        Self {
            span,
            test,
            body,
            orelse: None,
        }
    }

    /// Sets the else branch.
    #[must_use]
    pub fn with_orelse(mut self, orelse: Block) -> Self {
        self.orelse = Some(orelse);
        self
    }
}

/// Function definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncDef {
    /// Position of the statement.
    pub span: Span,
    /// Function name.
    pub name: String,
    /// Function body.
    pub body: Block,
}

impl FuncDef {
    /// Creates a function definition.
    #[must_use]
    pub fn new(span: Span, name: impl Into<String>, body: Block) -> Self {
        Self {
            span,
            name: name.into(),
            body,
        }
    }
}

/// Bare expression statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprStmt {
    /// Position of the statement.
    pub span: Span,
    /// The expression.
    pub expr: Expr,
}

impl ExprStmt {
    /// Creates an expression statement.
    #[must_use]
    pub fn new(span: Span, expr: Expr) -> Self {
        Self { span, expr }
    }
}

/// `pass` statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassStmt {
    /// Position of the statement.
    pub span: Span,
}

impl PassStmt {
    /// Creates a `pass` statement.
    #[must_use]
    pub fn new(span: Span) -> Self {
        Self { span }
    }
}

/// Expression node kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Name reference.
    Name(NameExpr),
    /// Attribute access, `base.attr`.
    Member(MemberExpr),
    /// Subscript, `base[index]`.
    Index(IndexExpr),
    /// Slice, `begin:end:stride` (only valid as a subscript index).
    Slice(SliceExpr),
    /// Comparison chain, `a == b`, `a < b <= c`.
    Comparison(ComparisonExpr),
    /// Boolean `and`/`or` with two operands.
    BoolOp(BoolOpExpr),
    /// Call expression.
    Call(CallExpr),
    /// Tuple display.
    Tuple(TupleExpr),
    /// List display.
    List(ListExpr),
    /// String literal.
    Str(StrLit),
    /// Integer literal.
    Int(IntLit),
}

impl Expr {
    /// Returns the expression's source position.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Name(e) => e.span,
            Self::Member(e) => e.span,
            Self::Index(e) => e.span,
            Self::Slice(e) => e.span,
            Self::Comparison(e) => e.span,
            Self::BoolOp(e) => e.span,
            Self::Call(e) => e.span,
            Self::Tuple(e) => e.span,
            Self::List(e) => e.span,
            Self::Str(e) => e.span,
            Self::Int(e) => e.span,
        }
    }
}

/// Canonical textual form of an expression.
///
/// This is the structural-equality key used by rules that compare
/// sub-expressions: two expressions are "the same" when their rendered
/// forms are byte-equal. It approximates source text and is never parsed
/// back.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(e) => write!(f, "{}", e.name),
            Self::Member(e) => write!(f, "{}.{}", e.base, e.attr),
            Self::Index(e) => write!(f, "{}[{}]", e.base, e.index),
            Self::Slice(e) => {
                if let Some(begin) = &e.begin {
                    write!(f, "{begin}")?;
                }
                write!(f, ":")?;
                if let Some(end) = &e.end {
                    write!(f, "{end}")?;
                }
                if let Some(stride) = &e.stride {
                    write!(f, ":{stride}")?;
                }
                Ok(())
            }
            Self::Comparison(e) => {
                let mut operands = e.operands.iter();
                if let Some(first) = operands.next() {
                    write!(f, "{first}")?;
                }
                for (op, operand) in e.operators.iter().zip(operands) {
                    write!(f, " {op} {operand}")?;
                }
                Ok(())
            }
            Self::BoolOp(e) => write!(f, "{} {} {}", e.left, e.op, e.right),
            Self::Call(e) => {
                write!(f, "{}(", e.callee)?;
                for (i, arg) in e.args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
            Self::Tuple(e) => {
                write!(f, "(")?;
                for (i, item) in e.items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                if e.items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Self::List(e) => {
                write!(f, "[")?;
                for (i, item) in e.items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Str(e) => write!(f, "{:?}", e.value),
            Self::Int(e) => write!(f, "{}", e.value),
        }
    }
}

/// Name reference with resolver-provided identity and type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameExpr {
    /// Position of the reference.
    pub span: Span,
    /// Short name as written in source.
    pub name: String,
    /// Fully-qualified name from the resolver, e.g. `pkg.mod.x`.
    pub fullname: String,
    /// Resolved static type, if the resolver produced one.
    pub ty: Option<TypeSig>,
}

impl NameExpr {
    /// Creates a name reference; the fully-qualified name defaults to the
    /// short name until overridden.
    #[must_use]
    pub fn new(span: Span, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            span,
            fullname: name.clone(),
            name,
            ty: None,
        }
    }

    /// Sets the fully-qualified name.
    #[must_use]
    pub fn with_fullname(mut self, fullname: impl Into<String>) -> Self {
        self.fullname = fullname.into();
        self
    }

    /// Sets the resolved static type.
    #[must_use]
    pub fn with_type(mut self, ty: TypeSig) -> Self {
        self.ty = Some(ty);
        self
    }
}

/// Attribute access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberExpr {
    /// Position of the access.
    pub span: Span,
    /// Base expression.
    pub base: Box<Expr>,
    /// Attribute name.
    pub attr: String,
}

impl MemberExpr {
    /// Creates an attribute access.
    #[must_use]
    pub fn new(span: Span, base: Expr, attr: impl Into<String>) -> Self {
        Self {
            span,
            base: Box::new(base),
            attr: attr.into(),
        }
    }
}

/// Subscript expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexExpr {
    /// Position of the subscript.
    pub span: Span,
    /// Base being subscripted.
    pub base: Box<Expr>,
    /// Index expression (possibly a [`SliceExpr`]).
    pub index: Box<Expr>,
}

impl IndexExpr {
    /// Creates a subscript expression.
    #[must_use]
    pub fn new(span: Span, base: Expr, index: Expr) -> Self {
        Self {
            span,
            base: Box::new(base),
            index: Box::new(index),
        }
    }
}

/// Slice expression; all three bounds optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceExpr {
    /// Position of the slice.
    pub span: Span,
    /// Start bound.
    pub begin: Option<Box<Expr>>,
    /// Stop bound.
    pub end: Option<Box<Expr>>,
    /// Step.
    pub stride: Option<Box<Expr>>,
}

impl SliceExpr {
    /// Creates the full-range slice `[:]`.
    #[must_use]
    pub fn full(span: Span) -> Self {
        Self {
            span,
            begin: None,
            end: None,
            stride: None,
        }
    }

    /// Sets the start bound.
    #[must_use]
    pub fn with_begin(mut self, begin: Expr) -> Self {
        self.begin = Some(Box::new(begin));
        self
    }

    /// Sets the stop bound.
    #[must_use]
    pub fn with_end(mut self, end: Expr) -> Self {
        self.end = Some(Box::new(end));
        self
    }

    /// Sets the step.
    #[must_use]
    pub fn with_stride(mut self, stride: Expr) -> Self {
        self.stride = Some(Box::new(stride));
        self
    }

    /// True when start, stop, and step are all absent.
    #[must_use]
    pub fn is_full_range(&self) -> bool {
        self.begin.is_none() && self.end.is_none() && self.stride.is_none()
    }
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CmpOp {
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtE,
    /// `>`
    Gt,
    /// `>=`
    GtE,
    /// `in`
    In,
    /// `not in`
    NotIn,
    /// `is`
    Is,
    /// `is not`
    IsNot,
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtE => "<=",
            Self::Gt => ">",
            Self::GtE => ">=",
            Self::In => "in",
            Self::NotIn => "not in",
            Self::Is => "is",
            Self::IsNot => "is not",
        };
        write!(f, "{text}")
    }
}

/// Comparison chain: `operands.len() == operators.len() + 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonExpr {
    /// Position of the comparison.
    pub span: Span,
    /// Operators between consecutive operands.
    pub operators: Vec<CmpOp>,
    /// Operands in source order.
    pub operands: Vec<Expr>,
}

impl ComparisonExpr {
    /// Creates a two-operand comparison.
    #[must_use]
    pub fn new(span: Span, op: CmpOp, left: Expr, right: Expr) -> Self {
        Self {
            span,
            operators: vec![op],
            operands: vec![left, right],
        }
    }
}

/// Boolean operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoolOp {
    /// `and`
    And,
    /// `or`
    Or,
}

impl fmt::Display for BoolOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
        }
    }
}

/// Binary boolean expression. Chains associate left-to-right, so
/// `a or b or c` arrives as `BoolOp(BoolOp(a, b), c)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoolOpExpr {
    /// Position of the operator node.
    pub span: Span,
    /// Operator.
    pub op: BoolOp,
    /// Left operand.
    pub left: Box<Expr>,
    /// Right operand.
    pub right: Box<Expr>,
}

impl BoolOpExpr {
    /// Creates a boolean expression.
    #[must_use]
    pub fn new(span: Span, op: BoolOp, left: Expr, right: Expr) -> Self {
        Self {
            span,
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Call expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    /// Position of the call.
    pub span: Span,
    /// Callee expression.
    pub callee: Box<Expr>,
    /// Positional arguments.
    pub args: Vec<Expr>,
}

impl CallExpr {
    /// Creates a call expression.
    #[must_use]
    pub fn new(span: Span, callee: Expr, args: Vec<Expr>) -> Self {
        Self {
            span,
            callee: Box::new(callee),
            args,
        }
    }
}

/// Tuple display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TupleExpr {
    /// Position of the tuple.
    pub span: Span,
    /// Items in source order.
    pub items: Vec<Expr>,
}

impl TupleExpr {
    /// Creates a tuple display.
    #[must_use]
    pub fn new(span: Span, items: Vec<Expr>) -> Self {
        Self { span, items }
    }
}

/// List display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListExpr {
    /// Position of the list.
    pub span: Span,
    /// Items in source order.
    pub items: Vec<Expr>,
}

impl ListExpr {
    /// Creates a list display.
    #[must_use]
    pub fn new(span: Span, items: Vec<Expr>) -> Self {
        Self { span, items }
    }
}

/// String literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrLit {
    /// Position of the literal.
    pub span: Span,
    /// Literal value, unquoted.
    pub value: String,
}

impl StrLit {
    /// Creates a string literal.
    #[must_use]
    pub fn new(span: Span, value: impl Into<String>) -> Self {
        Self {
            span,
            value: value.into(),
        }
    }
}

/// Integer literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntLit {
    /// Position of the literal.
    pub span: Span,
    /// Literal value.
    pub value: i64,
}

impl IntLit {
    /// Creates an integer literal.
    #[must_use]
    pub fn new(span: Span, value: i64) -> Self {
        Self { span, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sp() -> Span {
        Span::new(1, 1)
    }

    #[test]
    fn display_name_and_member() {
        let expr = Expr::Member(MemberExpr::new(
            sp(),
            Expr::Name(NameExpr::new(sp(), "obj")),
            "field",
        ));
        assert_eq!(expr.to_string(), "obj.field");
    }

    #[test]
    fn display_comparison_chain() {
        let expr = Expr::Comparison(ComparisonExpr {
            span: sp(),
            operators: vec![CmpOp::Lt, CmpOp::LtE],
            operands: vec![
                Expr::Name(NameExpr::new(sp(), "a")),
                Expr::Name(NameExpr::new(sp(), "b")),
                Expr::Name(NameExpr::new(sp(), "c")),
            ],
        });
        assert_eq!(expr.to_string(), "a < b <= c");
    }

    #[test]
    fn display_full_slice_subscript() {
        let expr = Expr::Index(IndexExpr::new(
            sp(),
            Expr::Name(NameExpr::new(sp(), "xs")),
            Expr::Slice(SliceExpr::full(sp())),
        ));
        assert_eq!(expr.to_string(), "xs[:]");
    }

    #[test]
    fn display_bounded_slice() {
        let slice = SliceExpr::full(sp())
            .with_begin(Expr::Int(IntLit::new(sp(), 1)))
            .with_stride(Expr::Int(IntLit::new(sp(), 2)));
        assert!(!slice.is_full_range());
        assert_eq!(Expr::Slice(slice).to_string(), "1::2");
    }

    #[test]
    fn display_call_with_string_arg() {
        let expr = Expr::Call(CallExpr::new(
            sp(),
            Expr::Name(NameExpr::new(sp(), "open")),
            vec![Expr::Str(StrLit::new(sp(), "file.txt"))],
        ));
        assert_eq!(expr.to_string(), "open(\"file.txt\")");
    }

    #[test]
    fn display_single_item_tuple_keeps_trailing_comma() {
        let expr = Expr::Tuple(TupleExpr::new(
            sp(),
            vec![Expr::Int(IntLit::new(sp(), 1))],
        ));
        assert_eq!(expr.to_string(), "(1,)");
    }

    #[test]
    fn type_sig_display() {
        let ty = TypeSig::instance("builtins.dict", vec![
            TypeSig::instance("builtins.str", vec![]),
            TypeSig::instance("builtins.int", vec![]),
        ]);
        assert_eq!(ty.to_string(), "builtins.dict[builtins.str, builtins.int]");

        let tup = TypeSig::Tuple(vec![TypeSig::Any]);
        assert_eq!(tup.to_string(), "tuple[Any]");
    }

    #[test]
    fn module_round_trips_through_json() {
        let module = Module::new(
            "m",
            vec![Stmt::Assign(AssignStmt::new(
                Span::new(1, 1),
                Expr::Name(NameExpr::new(Span::new(1, 1), "x")),
                Expr::Int(IntLit::new(Span::new(1, 5), 3)),
            ))],
        );
        let json = serde_json::to_string(&module).unwrap();
        let back: Module = serde_json::from_str(&json).unwrap();
        assert_eq!(back, module);
    }
}
