mod common;

use common::{at, int, loc, loc_stmt, name};
use wencode_ast::{
    ArrowBody, ArrowFunctionExpr, BlockStmt, Expr, ExprStmt, FunDeclStmt, Ident, IfStmt, Located,
    NodeKind, NodeRef, NonEmpty, ReturnStmt, Stmt, StmtExt, StmtKind, VarDeclStmt, VarDeclarator,
    VarKind, WhileStmt,
};

fn var_decl(id: &str, init: i64) -> Stmt {
    let declarator = VarDeclarator::new(Located::new(Ident::new(id), at(0, 0)), Some(int(init)));
    Stmt::VarDecl(VarDeclStmt::new(
        VarKind::Let,
        NonEmpty::new(Located::new(declarator, at(0, 0))),
    ))
}

fn block(body: Vec<Stmt>) -> Stmt {
    Stmt::Block(BlockStmt::new(body.into_iter().map(loc_stmt).collect()))
}

fn stmt_name(node: NodeRef<'_>) -> &'static str {
    match node.kind() {
        NodeKind::Stmt(StmtKind::Block) => "block",
        NodeKind::Stmt(StmtKind::VarDecl) => "var_decl",
        NodeKind::Stmt(StmtKind::Expression) => "expression",
        NodeKind::Stmt(StmtKind::Return) => "return",
        NodeKind::Stmt(StmtKind::If) => "if",
        NodeKind::Stmt(StmtKind::While) => "while",
        _ => "other",
    }
}

#[test]
fn test_walk_statements() {
    // Create a block with various statement types
    let block = loc_stmt(block(vec![
        var_decl("x", 42),
        Stmt::Expression(ExprStmt::new(name("x"))),
        Stmt::Return(ReturnStmt::new(Some(name("x")))),
    ]));

    let mut visited = Vec::new();
    let result = block.walk(&mut |node| {
        visited.push(stmt_name(node));
        Ok::<(), ()>(())
    });

    assert!(result.is_ok());
    assert_eq!(visited, vec!["block", "var_decl", "expression", "return"]);
}

#[test]
fn test_walk_post_order_statements() {
    // 如果 (真) { 1; } 否则 { 2; }
    let if_stmt = loc_stmt(Stmt::If(IfStmt::new(
        name("真"),
        loc_stmt(block(vec![Stmt::Expression(ExprStmt::new(int(1)))])),
        Some(loc_stmt(block(vec![Stmt::Expression(ExprStmt::new(int(2)))]))),
    )));

    let mut visited = Vec::new();
    let result = if_stmt.walk_post(&mut |node| {
        visited.push(stmt_name(node));
        Ok::<(), ()>(())
    });

    assert!(result.is_ok());
    assert_eq!(
        visited,
        vec!["expression", "block", "expression", "block", "if"]
    );
}

#[test]
fn test_walk_reaches_function_bodies() {
    let body = BlockStmt::new(vec![loc_stmt(Stmt::Return(ReturnStmt::new(None)))]);
    let fun = loc_stmt(Stmt::FunDecl(FunDeclStmt::new(
        Located::new(Ident::new("f"), at(0, 0)),
        vec![],
        Located::new(body, at(0, 0)),
    )));

    let mut visited = Vec::new();
    let _ = fun.walk(&mut |node| {
        visited.push(node.kind().as_str());
        Ok::<(), ()>(())
    });

    assert_eq!(
        visited,
        vec!["FunctionDeclaration", "BlockStatement", "ReturnStatement"]
    );
}

#[test]
fn test_early_exit_statements() {
    let block = loc_stmt(block(vec![
        var_decl("a", 1),
        Stmt::Return(ReturnStmt::new(None)),
        var_decl("b", 2),
    ]));

    let mut count = 0;
    let result = block.walk(&mut |node| {
        count += 1;
        if node.kind() == NodeKind::Stmt(StmtKind::Return) {
            Err("found return")
        } else {
            Ok(())
        }
    });

    assert_eq!(result, Err("found return"));
    assert_eq!(count, 3); // block, var_decl, return
}

#[test]
fn test_find_statements() {
    let nested = loc_stmt(block(vec![
        var_decl("x", 1),
        Stmt::While(WhileStmt::new(name("x"), loc_stmt(block(vec![var_decl("y", 2)])))),
    ]));

    let decls = nested.find_statements(|node| node.kind() == NodeKind::Stmt(StmtKind::VarDecl));
    assert_eq!(decls.len(), 2);
}

#[test]
fn test_walk_expressions() {
    let stmt = loc_stmt(block(vec![
        var_decl("x", 1),
        Stmt::Expression(ExprStmt::new(name("x"))),
    ]));

    let mut kinds = Vec::new();
    let _ = stmt.walk_expressions(&mut |expr| {
        kinds.push(expr.node.kind().as_str());
        Ok::<(), ()>(())
    });

    // The declared name is a binding, not an expression
    assert_eq!(kinds, vec!["Literal", "Identifier"]);
}

#[test]
fn test_can_exit_early() {
    let plain = loc_stmt(var_decl("x", 1));
    assert!(!plain.can_exit_early());

    let ret = loc_stmt(Stmt::Return(ReturnStmt::new(Some(int(1)))));
    assert!(ret.can_exit_early());

    let guarded = loc_stmt(Stmt::If(IfStmt::new(name("x"), ret.clone(), None)));
    assert!(guarded.can_exit_early());

    // A return inside an arrow body belongs to the arrow
    let arrow = loc(Expr::Arrow(ArrowFunctionExpr::new(
        vec![],
        ArrowBody::Block(Located::new(BlockStmt::new(vec![ret]), at(0, 0))),
    )));
    let callback = loc_stmt(Stmt::Expression(ExprStmt::new(arrow)));
    assert!(!callback.can_exit_early());
}
