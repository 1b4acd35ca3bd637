//! End-to-end tests running the built-in catalogue over one tree.

use spruce::ast::{
    AssignStmt, Block, BoolOp, BoolOpExpr, CallExpr, CmpOp, ComparisonExpr, Expr, IfStmt,
    IndexExpr, MemberExpr, NameExpr, PassStmt, SliceExpr, StrLit, Stmt, WithItem, WithStmt,
};
use spruce::{Engine, Module, Registry, Selection, SelectionError, Span, TypeSig};

fn name(line: usize, column: usize, n: &str) -> Expr {
    Expr::Name(NameExpr::new(Span::new(line, column), n).with_fullname(format!("m.{n}")))
}

fn str_lit(line: usize, column: usize, value: &str) -> Expr {
    Expr::Str(StrLit::new(Span::new(line, column), value))
}

fn eq(line: usize, column: usize, left: Expr, right: Expr) -> Expr {
    Expr::Comparison(ComparisonExpr::new(Span::new(line, column), CmpOp::Eq, left, right))
}

/// A module exercising all three built-in rules:
///
/// ```text
/// 1: x = ""
/// 2: with open("file.txt") as f:
/// 3:     x = f.read()
/// 4: ys = xs[:]
/// 5: if x == "a" or x == "b":
/// 6:     pass
/// ```
fn fixture() -> Module {
    let list_of_int = TypeSig::instance(
        "builtins.list",
        vec![TypeSig::instance("builtins.int", vec![])],
    );

    Module::new(
        "m",
        vec![
            Stmt::Assign(AssignStmt::new(
                Span::new(1, 1),
                name(1, 1, "x"),
                str_lit(1, 5, ""),
            )),
            Stmt::With(WithStmt::new(
                Span::new(2, 1),
                WithItem::new(Expr::Call(CallExpr::new(
                    Span::new(2, 6),
                    name(2, 6, "open"),
                    vec![str_lit(2, 11, "file.txt")],
                )))
                .with_target(name(2, 25, "f")),
                Block::new(vec![Stmt::Assign(AssignStmt::new(
                    Span::new(3, 5),
                    name(3, 5, "x"),
                    Expr::Call(CallExpr::new(
                        Span::new(3, 9),
                        Expr::Member(MemberExpr::new(Span::new(3, 9), name(3, 9, "f"), "read")),
                        vec![],
                    )),
                ))]),
            )),
            Stmt::Assign(AssignStmt::new(
                Span::new(4, 1),
                name(4, 1, "ys"),
                Expr::Index(IndexExpr::new(
                    Span::new(4, 6),
                    Expr::Name(
                        NameExpr::new(Span::new(4, 6), "xs")
                            .with_fullname("m.xs")
                            .with_type(list_of_int),
                    ),
                    Expr::Slice(SliceExpr::full(Span::new(4, 8))),
                )),
            )),
            Stmt::If(IfStmt::new(
                Span::new(5, 1),
                Expr::BoolOp(BoolOpExpr::new(
                    Span::new(5, 4),
                    BoolOp::Or,
                    eq(5, 4, name(5, 4, "x"), str_lit(5, 9, "a")),
                    eq(5, 16, name(5, 16, "x"), str_lit(5, 21, "b")),
                )),
                Block::new(vec![Stmt::Pass(PassStmt::new(Span::new(6, 5)))]),
            )),
        ],
    )
}

#[test]
fn full_catalogue_finds_all_three_patterns_in_order() {
    let report = spruce::run(&fixture(), &Selection::all());
    assert!(report.invalid_selectors.is_empty());

    let found: Vec<(u32, usize, usize)> = report
        .diagnostics
        .iter()
        .map(|d| (d.code, d.line, d.column))
        .collect();
    assert_eq!(found, [(127, 1, 1), (145, 4, 6), (108, 5, 4)]);
}

#[test]
fn repeated_runs_produce_identical_reports() {
    let module = fixture();
    let first = spruce::run(&module, &Selection::all());
    let second = spruce::run(&module, &Selection::all());
    assert_eq!(first.diagnostics, second.diagnostics);
}

#[test]
fn output_is_independent_of_rule_registration_order() {
    let module = fixture();
    let baseline = spruce::run(&module, &Selection::all());

    let mut reversed = spruce::rules::all_rules();
    reversed.reverse();
    let registry = Registry::from_rules(reversed).unwrap();
    let permuted = Engine::new(&registry).run(&module, &Selection::all());

    assert_eq!(permuted.diagnostics, baseline.diagnostics);
}

#[test]
fn selection_by_code_runs_only_that_rule() {
    let report = spruce::run(&fixture(), &Selection::codes([145]));
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].rule, "no-slice-copy");
}

#[test]
fn selection_by_category_spans_rules() {
    let report = spruce::run(&fixture(), &Selection::categories(["readability"]));
    let codes: Vec<u32> = report.diagnostics.iter().map(|d| d.code).collect();
    // All three built-ins carry the readability tag.
    assert_eq!(codes, [127, 145, 108]);
}

#[test]
fn unknown_selector_is_reported_not_fatal() {
    let report = spruce::run(
        &fixture(),
        &Selection::new(vec![
            spruce::Selector::Code(145),
            spruce::Selector::Code(9999),
        ]),
    );
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.invalid_selectors, [SelectionError::UnknownCode(9999)]);
}

#[test]
fn clean_module_yields_empty_report() {
    let module = Module::new(
        "m",
        vec![Stmt::Assign(AssignStmt::new(
            Span::new(1, 1),
            name(1, 1, "x"),
            str_lit(1, 5, "hello"),
        ))],
    );
    let report = spruce::run(&module, &Selection::all());
    assert!(report.is_clean());
}

#[test]
fn list_rules_is_ordered_and_documented() {
    let infos = spruce::list_rules();
    let codes: Vec<u32> = infos.iter().map(|i| i.code).collect();
    assert_eq!(codes, [108, 127, 145]);

    for info in &infos {
        assert!(!info.message.is_empty());
        assert!(!info.categories.is_empty());
        assert!(info.explanation.contains("Bad:"));
        assert!(info.explanation.contains("Good:"));
    }
}

#[test]
fn tree_handed_over_as_json_produces_the_same_report() {
    let module = fixture();
    let json = serde_json::to_string(&module).unwrap();
    let parsed: Module = serde_json::from_str(&json).unwrap();

    let direct = spruce::run(&module, &Selection::all());
    let via_json = spruce::run(&parsed, &Selection::all());
    assert_eq!(direct.diagnostics, via_json.diagnostics);
}
