mod common;

use common::{at, int, loc, loc_stmt, name};
use wencode_ast::ast::query::AstQuery;
use wencode_ast::{
    ArrowBody, ArrowFunctionExpr, AssignOp, AssignTarget, AssignmentExpr, BinaryExpr, BinaryOp,
    BlockStmt, CallExpr, ExportDecl, Expr, ExprStmt, FunDeclStmt, Ident, ImportDecl,
    ImportSpecifier, Located, MemberExpr, NonEmpty, ObjectExpr, Program, Property, Stmt, StrLit,
    VarDeclStmt, VarDeclarator, VarKind,
};

fn binding(n: &str) -> Located<Ident> {
    Located::new(Ident::new(n), at(0, 0))
}

fn var_decl(kind: VarKind, names: &[&str]) -> Stmt {
    let mut declarators = names
        .iter()
        .map(|n| Located::new(VarDeclarator::new(binding(n), None), at(0, 0)));
    let head = declarators.next().unwrap();
    Stmt::VarDecl(VarDeclStmt::new(
        kind,
        NonEmpty {
            head,
            tail: declarators.collect(),
        },
    ))
}

fn import(pairs: &[(&str, &str)], source: &str) -> Stmt {
    let specifiers: Vec<_> = pairs
        .iter()
        .map(|(imported, local)| {
            Located::new(
                ImportSpecifier::new(binding(imported), binding(local)),
                at(0, 0),
            )
        })
        .collect();
    Stmt::Import(ImportDecl::new(
        NonEmpty::from_vec(specifiers).unwrap(),
        Located::new(StrLit::new(source, format!("'{}'", source)), at(0, 0)),
    ))
}

#[test]
fn test_contains_calls() {
    // Simple identifier - no calls
    assert!(!AstQuery::contains_calls(&name("x")));

    // foo()
    let call = loc(Expr::Call(CallExpr::new(name("foo"), vec![])));
    assert!(AstQuery::contains_calls(&call));

    // foo() + 42
    let binary = loc(Expr::Binary(BinaryExpr::new(BinaryOp::Add, call, int(42))));
    assert!(AstQuery::contains_calls(&binary));
}

#[test]
fn test_count_calls_inside_arrow() {
    // () => f(g())
    let inner = loc(Expr::Call(CallExpr::new(name("g"), vec![])));
    let outer = loc(Expr::Call(CallExpr::new(name("f"), vec![inner])));
    let arrow = loc(Expr::Arrow(ArrowFunctionExpr::new(
        vec![],
        ArrowBody::Expression(Box::new(outer)),
    )));

    assert_eq!(AstQuery::count_calls(&arrow), 2);
}

#[test]
fn test_collect_identifiers_in_assignment() {
    // obj.count += step
    let target = AssignTarget::try_from_expr(loc(Expr::Member(MemberExpr::new(
        name("obj"),
        name("count"),
        false,
    ))))
    .unwrap();
    let assignment = loc(Expr::Assignment(AssignmentExpr::new(
        AssignOp::AddAssign,
        target,
        name("step"),
    )));

    let ids = AstQuery::collect_identifiers(&assignment);
    assert_eq!(ids.len(), 2);
    assert!(ids.contains("obj"));
    assert!(ids.contains("step"));
}

#[test]
fn test_collect_identifiers_in_object() {
    // { key: value, shorthand, [computed]: 1 }
    let object = loc(Expr::Object(ObjectExpr::new(vec![
        Located::new(Property::new(name("key"), name("value"), false, false), at(0, 0)),
        Located::new(
            Property::new(name("shorthand"), name("shorthand"), false, true),
            at(0, 0),
        ),
        Located::new(Property::new(name("computed"), int(1), true, false), at(0, 0)),
    ])));

    let mut ids: Vec<_> = AstQuery::collect_identifiers(&object).into_iter().collect();
    ids.sort();
    assert_eq!(ids, vec!["computed", "shorthand", "value"]);
}

#[test]
fn test_collect_identifiers_skips_bindings() {
    // 函数 f(a) { a + b; }
    let body = BlockStmt::new(vec![loc_stmt(Stmt::Expression(ExprStmt::new(loc(
        Expr::Binary(BinaryExpr::new(BinaryOp::Add, name("a"), name("b"))),
    ))))]);
    let fun = loc_stmt(Stmt::FunDecl(FunDeclStmt::new(
        binding("f"),
        vec![binding("a")],
        Located::new(body, at(0, 0)),
    )));

    let mut ids: Vec<_> = AstQuery::collect_identifiers(&fun).into_iter().collect();
    ids.sort();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn test_declared_names() {
    let fun = Stmt::FunDecl(FunDeclStmt::new(
        binding("main"),
        vec![],
        Located::new(BlockStmt::default(), at(0, 0)),
    ));
    let program = Program::new(
        vec![
            loc_stmt(import(&[("读取", "读取"), ("write", "写入")], "./io")),
            loc_stmt(var_decl(VarKind::Let, &["x", "y"])),
            loc_stmt(Stmt::Export(ExportDecl::new(
                loc_stmt(var_decl(VarKind::Const, &["版本"])),
                false,
            ))),
            loc_stmt(Stmt::Export(ExportDecl::new(loc_stmt(fun), true))),
            loc_stmt(Stmt::Expression(ExprStmt::new(name("ignored")))),
        ],
        at(0, 0),
    );

    assert_eq!(
        AstQuery::declared_names(&program),
        vec!["读取", "写入", "x", "y", "版本", "main"]
    );
}

#[test]
fn test_imported_modules() {
    let program = Program::new(
        vec![
            loc_stmt(import(&[("a", "a")], "./first")),
            loc_stmt(var_decl(VarKind::Let, &["x"])),
            loc_stmt(import(&[("b", "b")], "std/数学")),
        ],
        at(0, 0),
    );

    assert_eq!(
        AstQuery::imported_modules(&program),
        vec!["./first", "std/数学"]
    );
}
