use super::node::{AsNode, NodeRef};
use super::traversal::ExprExt;
use super::{AssignTarget, Expr, LocatedExpr, LocatedStmt, Program, Stmt};
use std::collections::HashSet;

/// Query API for common AST traversal patterns
pub struct AstQuery;

impl AstQuery {
    /// Check if an expression contains any function calls
    pub fn contains_calls(expr: &LocatedExpr) -> bool {
        expr.any_subexpr(|e| matches!(e.node, Expr::Call(_)))
    }

    /// Count the number of function calls in an expression, nested ones included
    pub fn count_calls(expr: &LocatedExpr) -> usize {
        expr.find_subexpressions(|e| matches!(e.node, Expr::Call(_)))
            .len()
    }

    /// Get all identifiers referenced below a node
    ///
    /// Binding positions (declared names, parameters) are not references,
    /// and neither are the property names in `a.b` or `{ b: 1 }`.
    pub fn collect_identifiers<N: AsNode>(node: &N) -> HashSet<String> {
        let mut ids = HashSet::new();
        Self::collect_identifiers_impl(node.as_node(), &mut ids);
        ids
    }

    fn collect_identifiers_impl(node: NodeRef<'_>, acc: &mut HashSet<String>) {
        match node {
            NodeRef::Expr(expr) => match &expr.node {
                Expr::Identifier(ident) => {
                    acc.insert(ident.name.clone());
                }
                Expr::Member(member) if !member.computed => {
                    Self::collect_identifiers_impl(member.object.as_node(), acc);
                }
                _ => Self::collect_children(node, acc),
            },
            NodeRef::AssignTarget(target) => match &target.node {
                AssignTarget::Identifier(ident) => {
                    acc.insert(ident.name.clone());
                }
                AssignTarget::Member(member) if !member.computed => {
                    Self::collect_identifiers_impl(member.object.as_node(), acc);
                }
                AssignTarget::Member(_) => Self::collect_children(node, acc),
            },
            NodeRef::Property(property) if !property.node.computed => {
                Self::collect_identifiers_impl(property.node.value.as_node(), acc);
            }
            NodeRef::Binding(_) => {}
            _ => Self::collect_children(node, acc),
        }
    }

    fn collect_children(node: NodeRef<'_>, acc: &mut HashSet<String>) {
        for child in node.children() {
            Self::collect_identifiers_impl(child, acc);
        }
    }

    /// Names bound at the top level of a program, in declaration order
    ///
    /// Covers variables, functions and import locals, including those
    /// behind an export.
    pub fn declared_names(program: &Program) -> Vec<String> {
        let mut names = Vec::new();
        for stmt in &program.body {
            Self::declared_names_impl(stmt, &mut names);
        }
        names
    }

    fn declared_names_impl(stmt: &LocatedStmt, acc: &mut Vec<String>) {
        match &stmt.node {
            Stmt::VarDecl(decl) => {
                acc.extend(decl.declarations.iter().map(|d| d.node.id.node.name.clone()));
            }
            Stmt::FunDecl(fun) => acc.push(fun.id.node.name.clone()),
            Stmt::Import(import) => {
                acc.extend(import.specifiers.iter().map(|s| s.node.local.node.name.clone()));
            }
            Stmt::Export(export) => Self::declared_names_impl(&export.declaration, acc),
            _ => {}
        }
    }

    /// Module sources named by top-level imports, in order
    pub fn imported_modules(program: &Program) -> Vec<&str> {
        program
            .body
            .iter()
            .filter_map(|stmt| match &stmt.node {
                Stmt::Import(import) => Some(import.source.node.value.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::{BinaryExpr, BinaryOp, CallExpr, Ident, Located, LiteralExpr, MemberExpr};
    use super::*;
    use crate::span::Span;

    fn at(start: usize, end: usize) -> Span {
        Span::new(1, start + 1, start, end).unwrap()
    }

    fn ident(name: &str, start: usize) -> LocatedExpr {
        Located::new(Expr::Identifier(Ident::new(name)), at(start, start + name.len()))
    }

    #[test]
    fn test_contains_calls() {
        // Simple identifier - no calls
        let expr = ident("x", 0);
        assert!(!AstQuery::contains_calls(&expr));

        // foo()
        let call = Located::new(Expr::Call(CallExpr::new(ident("foo", 0), vec![])), at(0, 5));
        assert!(AstQuery::contains_calls(&call));

        // foo() + 42
        let binary = Located::new(
            Expr::Binary(BinaryExpr::new(
                BinaryOp::Add,
                call,
                Located::new(Expr::Literal(LiteralExpr::number(42.0, "42")), at(8, 10)),
            )),
            at(0, 10),
        );
        assert!(AstQuery::contains_calls(&binary));
    }

    #[test]
    fn test_collect_identifiers() {
        // x + y
        let expr = Located::new(
            Expr::Binary(BinaryExpr::new(BinaryOp::Add, ident("x", 0), ident("y", 4))),
            at(0, 5),
        );

        let ids = AstQuery::collect_identifiers(&expr);
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("x"));
        assert!(ids.contains("y"));
    }

    #[test]
    fn test_collect_identifiers_skips_property_names() {
        // obj.field[key]
        let field = Located::new(
            Expr::Member(MemberExpr::new(ident("obj", 0), ident("field", 4), false)),
            at(0, 9),
        );
        let expr = Located::new(
            Expr::Member(MemberExpr::new(field, ident("key", 10), true)),
            at(0, 14),
        );

        let ids = AstQuery::collect_identifiers(&expr);
        assert!(ids.contains("obj"));
        assert!(ids.contains("key"));
        assert!(!ids.contains("field"));
    }

    #[test]
    fn test_count_calls() {
        // f(g(x))
        let inner = Located::new(Expr::Call(CallExpr::new(ident("g", 2), vec![ident("x", 4)])), at(2, 6));
        let outer = Located::new(Expr::Call(CallExpr::new(ident("f", 0), vec![inner])), at(0, 7));

        assert_eq!(AstQuery::count_calls(&outer), 2);
        assert_eq!(AstQuery::count_calls(&ident("f", 0)), 0);
    }
}
