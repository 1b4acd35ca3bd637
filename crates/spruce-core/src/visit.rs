//! Depth-first traversal over the syntax tree.
//!
//! Modeled on `syn::visit`: the [`Visit`] trait has one method per node
//! kind, each defaulting to the free function of the same name, which
//! descends into the node's children in source order. A rule overrides
//! only the kinds it cares about; skipping the call to the free function
//! suppresses traversal into that subtree.
//!
//! Traversal is single-pass, pre-order, and synchronous. Nothing here
//! panics on any well-formed tree shape.

use crate::ast::{
    AssignStmt, Block, BoolOpExpr, CallExpr, ComparisonExpr, DelStmt, Expr, ExprStmt, FuncDef,
    IfStmt, IndexExpr, IntLit, ListExpr, MemberExpr, Module, NameExpr, PassStmt, SliceExpr, Stmt,
    StrLit, TupleExpr, WithStmt,
};

/// Syntax tree traversal with overridable per-kind hooks.
#[allow(unused_variables)]
pub trait Visit<'ast> {
    /// Visits a module.
    fn visit_module(&mut self, node: &'ast Module) {
        visit_module(self, node);
    }

    /// Visits a nested block.
    fn visit_block(&mut self, node: &'ast Block) {
        visit_block(self, node);
    }

    /// Visits a statement, dispatching on its kind.
    fn visit_stmt(&mut self, node: &'ast Stmt) {
        visit_stmt(self, node);
    }

    /// Visits an assignment statement.
    fn visit_assign_stmt(&mut self, node: &'ast AssignStmt) {
        visit_assign_stmt(self, node);
    }

    /// Visits a deletion statement.
    fn visit_del_stmt(&mut self, node: &'ast DelStmt) {
        visit_del_stmt(self, node);
    }

    /// Visits a with-block.
    fn visit_with_stmt(&mut self, node: &'ast WithStmt) {
        visit_with_stmt(self, node);
    }

    /// Visits a conditional statement.
    fn visit_if_stmt(&mut self, node: &'ast IfStmt) {
        visit_if_stmt(self, node);
    }

    /// Visits a function definition.
    fn visit_func_def(&mut self, node: &'ast FuncDef) {
        visit_func_def(self, node);
    }

    /// Visits a bare expression statement.
    fn visit_expr_stmt(&mut self, node: &'ast ExprStmt) {
        visit_expr_stmt(self, node);
    }

    /// Visits a `pass` statement.
    fn visit_pass_stmt(&mut self, node: &'ast PassStmt) {}

    /// Visits an expression, dispatching on its kind.
    fn visit_expr(&mut self, node: &'ast Expr) {
        visit_expr(self, node);
    }

    /// Visits a name reference.
    fn visit_name_expr(&mut self, node: &'ast NameExpr) {}

    /// Visits an attribute access.
    fn visit_member_expr(&mut self, node: &'ast MemberExpr) {
        visit_member_expr(self, node);
    }

    /// Visits a subscript expression.
    fn visit_index_expr(&mut self, node: &'ast IndexExpr) {
        visit_index_expr(self, node);
    }

    /// Visits a slice expression.
    fn visit_slice_expr(&mut self, node: &'ast SliceExpr) {
        visit_slice_expr(self, node);
    }

    /// Visits a comparison chain.
    fn visit_comparison_expr(&mut self, node: &'ast ComparisonExpr) {
        visit_comparison_expr(self, node);
    }

    /// Visits a boolean `and`/`or` expression.
    fn visit_bool_op_expr(&mut self, node: &'ast BoolOpExpr) {
        visit_bool_op_expr(self, node);
    }

    /// Visits a call expression.
    fn visit_call_expr(&mut self, node: &'ast CallExpr) {
        visit_call_expr(self, node);
    }

    /// Visits a tuple display.
    fn visit_tuple_expr(&mut self, node: &'ast TupleExpr) {
        visit_tuple_expr(self, node);
    }

    /// Visits a list display.
    fn visit_list_expr(&mut self, node: &'ast ListExpr) {
        visit_list_expr(self, node);
    }

    /// Visits a string literal.
    fn visit_str_lit(&mut self, node: &'ast StrLit) {}

    /// Visits an integer literal.
    fn visit_int_lit(&mut self, node: &'ast IntLit) {}
}

/// Default descent into a module's statements.
pub fn visit_module<'ast, V>(v: &mut V, node: &'ast Module)
where
    V: Visit<'ast> + ?Sized,
{
    for stmt in &node.body {
        v.visit_stmt(stmt);
    }
}

/// Default descent into a block's statements.
pub fn visit_block<'ast, V>(v: &mut V, node: &'ast Block)
where
    V: Visit<'ast> + ?Sized,
{
    for stmt in &node.body {
        v.visit_stmt(stmt);
    }
}

/// Default statement dispatch.
pub fn visit_stmt<'ast, V>(v: &mut V, node: &'ast Stmt)
where
    V: Visit<'ast> + ?Sized,
{
    match node {
        Stmt::Assign(s) => v.visit_assign_stmt(s),
        Stmt::Del(s) => v.visit_del_stmt(s),
        Stmt::With(s) => v.visit_with_stmt(s),
        Stmt::If(s) => v.visit_if_stmt(s),
        Stmt::FuncDef(s) => v.visit_func_def(s),
        Stmt::Expr(s) => v.visit_expr_stmt(s),
        Stmt::Pass(s) => v.visit_pass_stmt(s),
    }
}

/// Default descent: targets in source order, then the value.
pub fn visit_assign_stmt<'ast, V>(v: &mut V, node: &'ast AssignStmt)
where
    V: Visit<'ast> + ?Sized,
{
    for target in &node.targets {
        v.visit_expr(target);
    }
    v.visit_expr(&node.value);
}

/// Default descent into the deleted expression.
pub fn visit_del_stmt<'ast, V>(v: &mut V, node: &'ast DelStmt)
where
    V: Visit<'ast> + ?Sized,
{
    v.visit_expr(&node.expr);
}

/// Default descent: context items, then the body block.
pub fn visit_with_stmt<'ast, V>(v: &mut V, node: &'ast WithStmt)
where
    V: Visit<'ast> + ?Sized,
{
    for item in &node.items {
        v.visit_expr(&item.context);
        if let Some(target) = &item.target {
            v.visit_expr(target);
        }
    }
    v.visit_block(&node.body);
}

/// Default descent: test, body, else-block.
pub fn visit_if_stmt<'ast, V>(v: &mut V, node: &'ast IfStmt)
where
    V: Visit<'ast> + ?Sized,
{
    v.visit_expr(&node.test);
    v.visit_block(&node.body);
    if let Some(orelse) = &node.orelse {
        v.visit_block(orelse);
    }
}

/// Default descent into the function body.
pub fn visit_func_def<'ast, V>(v: &mut V, node: &'ast FuncDef)
where
    V: Visit<'ast> + ?Sized,
{
    v.visit_block(&node.body);
}

/// Default descent into the expression.
pub fn visit_expr_stmt<'ast, V>(v: &mut V, node: &'ast ExprStmt)
where
    V: Visit<'ast> + ?Sized,
{
    v.visit_expr(&node.expr);
}

/// Default expression dispatch.
pub fn visit_expr<'ast, V>(v: &mut V, node: &'ast Expr)
where
    V: Visit<'ast> + ?Sized,
{
    match node {
        Expr::Name(e) => v.visit_name_expr(e),
        Expr::Member(e) => v.visit_member_expr(e),
        Expr::Index(e) => v.visit_index_expr(e),
        Expr::Slice(e) => v.visit_slice_expr(e),
        Expr::Comparison(e) => v.visit_comparison_expr(e),
        Expr::BoolOp(e) => v.visit_bool_op_expr(e),
        Expr::Call(e) => v.visit_call_expr(e),
        Expr::Tuple(e) => v.visit_tuple_expr(e),
        Expr::List(e) => v.visit_list_expr(e),
        Expr::Str(e) => v.visit_str_lit(e),
        Expr::Int(e) => v.visit_int_lit(e),
    }
}

/// Default descent into the base expression.
pub fn visit_member_expr<'ast, V>(v: &mut V, node: &'ast MemberExpr)
where
    V: Visit<'ast> + ?Sized,
{
    v.visit_expr(&node.base);
}

/// Default descent: base, then index.
pub fn visit_index_expr<'ast, V>(v: &mut V, node: &'ast IndexExpr)
where
    V: Visit<'ast> + ?Sized,
{
    v.visit_expr(&node.base);
    v.visit_expr(&node.index);
}

/// Default descent into the present bounds.
pub fn visit_slice_expr<'ast, V>(v: &mut V, node: &'ast SliceExpr)
where
    V: Visit<'ast> + ?Sized,
{
    if let Some(begin) = &node.begin {
        v.visit_expr(begin);
    }
    if let Some(end) = &node.end {
        v.visit_expr(end);
    }
    if let Some(stride) = &node.stride {
        v.visit_expr(stride);
    }
}

/// Default descent into the operands.
pub fn visit_comparison_expr<'ast, V>(v: &mut V, node: &'ast ComparisonExpr)
where
    V: Visit<'ast> + ?Sized,
{
    for operand in &node.operands {
        v.visit_expr(operand);
    }
}

/// Default descent: left, then right.
pub fn visit_bool_op_expr<'ast, V>(v: &mut V, node: &'ast BoolOpExpr)
where
    V: Visit<'ast> + ?Sized,
{
    v.visit_expr(&node.left);
    v.visit_expr(&node.right);
}

/// Default descent: callee, then arguments.
pub fn visit_call_expr<'ast, V>(v: &mut V, node: &'ast CallExpr)
where
    V: Visit<'ast> + ?Sized,
{
    v.visit_expr(&node.callee);
    for arg in &node.args {
        v.visit_expr(arg);
    }
}

/// Default descent into the items.
pub fn visit_tuple_expr<'ast, V>(v: &mut V, node: &'ast TupleExpr)
where
    V: Visit<'ast> + ?Sized,
{
    for item in &node.items {
        v.visit_expr(item);
    }
}

/// Default descent into the items.
pub fn visit_list_expr<'ast, V>(v: &mut V, node: &'ast ListExpr)
where
    V: Visit<'ast> + ?Sized,
{
    for item in &node.items {
        v.visit_expr(item);
    }
}
