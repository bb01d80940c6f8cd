//! AST traversal for walking expression and statement trees.
//!
//! All traversal is derived from [`NodeRef::children`], so walking a new
//! variant only requires teaching `children` about it. The extension traits
//! narrow the generic walk down to expressions or statements.

use super::node::{AsNode, NodeRef};
use super::{Expr, Located, LocatedExpr, LocatedStmt, Stmt};

/// Visitor with hooks before and after a node's children
///
/// Returning `Err` from either hook stops the traversal.
pub trait Visit<'a> {
    type Error;

    fn enter(&mut self, node: NodeRef<'a>) -> Result<(), Self::Error>;

    fn leave(&mut self, _node: NodeRef<'a>) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<'a> NodeRef<'a> {
    /// Depth-first traversal calling `enter` then `leave` on every node
    pub fn accept<V>(&self, visitor: &mut V) -> Result<(), V::Error>
    where
        V: Visit<'a>,
    {
        visitor.enter(*self)?;
        for child in self.children() {
            child.accept(visitor)?;
        }
        visitor.leave(*self)
    }

    /// Walk the tree in pre-order
    ///
    /// Calls visitor on current node before its children. Return Err to stop early.
    pub fn walk<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(NodeRef<'a>) -> Result<(), E>,
    {
        visitor(*self)?;
        for child in self.children() {
            child.walk(visitor)?;
        }
        Ok(())
    }

    /// Walk the tree in post-order
    ///
    /// Calls visitor on children before current node. Useful for bottom-up analysis.
    pub fn walk_post<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(NodeRef<'a>) -> Result<(), E>,
    {
        for child in self.children() {
            child.walk_post(visitor)?;
        }
        visitor(*self)
    }

    /// All nodes in the subtree (this one included) matching a predicate, in pre-order
    pub fn find<F>(&self, predicate: F) -> Vec<NodeRef<'a>>
    where
        F: Fn(&NodeRef<'a>) -> bool,
    {
        let mut results = Vec::new();
        let _ = self.walk(&mut |node| {
            if predicate(&node) {
                results.push(node);
            }
            Ok::<(), ()>(())
        });
        results
    }

    /// Short-circuits on first match
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: Fn(&NodeRef<'a>) -> bool,
    {
        let mut found = false;
        let _ = self.walk(&mut |node| {
            if predicate(&node) {
                found = true;
                Err(()) // Early exit
            } else {
                Ok(())
            }
        });
        found
    }

    /// Short-circuits on first non-match
    pub fn all<F>(&self, predicate: F) -> bool
    where
        F: Fn(&NodeRef<'a>) -> bool,
    {
        !self.any(|node| !predicate(node))
    }

    /// Number of nodes below this one
    pub fn descendant_count(&self) -> usize {
        let mut count = 0usize;
        let _ = self.walk(&mut |_| {
            count += 1;
            Ok::<(), ()>(())
        });
        count - 1
    }
}

/// Extension trait for expression traversal
///
/// Only expression nodes are reported. Binding identifiers (parameters),
/// assignment targets and typed sub-nodes are skipped, though traversal
/// still descends through them, including into arrow-function bodies.
pub trait ExprExt {
    /// Walk the expression tree in pre-order
    ///
    /// Calls visitor on current node before its children. Return Err to stop early.
    fn walk<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&LocatedExpr) -> Result<(), E>;

    /// Walk the expression tree in post-order
    fn walk_post<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&LocatedExpr) -> Result<(), E>;

    /// Find all sub-expressions matching a predicate
    fn find_subexpressions<F>(&self, predicate: F) -> Vec<&LocatedExpr>
    where
        F: Fn(&LocatedExpr) -> bool;

    /// Check if any sub-expression matches a predicate
    ///
    /// Short-circuits on first match for efficiency.
    fn any_subexpr<F>(&self, predicate: F) -> bool
    where
        F: Fn(&LocatedExpr) -> bool;

    /// Check if all sub-expressions match a predicate
    fn all_subexprs<F>(&self, predicate: F) -> bool
    where
        F: Fn(&LocatedExpr) -> bool;
}

impl ExprExt for LocatedExpr {
    fn walk<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&LocatedExpr) -> Result<(), E>,
    {
        self.as_node().walk(&mut |node| match node {
            NodeRef::Expr(expr) => visitor(expr),
            _ => Ok(()),
        })
    }

    fn walk_post<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&LocatedExpr) -> Result<(), E>,
    {
        self.as_node().walk_post(&mut |node| match node {
            NodeRef::Expr(expr) => visitor(expr),
            _ => Ok(()),
        })
    }

    fn find_subexpressions<F>(&self, predicate: F) -> Vec<&LocatedExpr>
    where
        F: Fn(&LocatedExpr) -> bool,
    {
        let mut results = Vec::new();
        let _ = self.as_node().walk(&mut |node| {
            if let NodeRef::Expr(expr) = node {
                if predicate(expr) {
                    results.push(expr);
                }
            }
            Ok::<(), ()>(())
        });
        results
    }

    fn any_subexpr<F>(&self, predicate: F) -> bool
    where
        F: Fn(&LocatedExpr) -> bool,
    {
        let mut found = false;
        let _ = ExprExt::walk(self, &mut |expr| {
            if predicate(expr) {
                found = true;
                Err(()) // Early exit
            } else {
                Ok(())
            }
        });
        found
    }

    fn all_subexprs<F>(&self, predicate: F) -> bool
    where
        F: Fn(&LocatedExpr) -> bool,
    {
        let mut all_match = true;
        let _ = ExprExt::walk(self, &mut |expr| {
            if !predicate(expr) {
                all_match = false;
                Err(()) // Early exit
            } else {
                Ok(())
            }
        });
        all_match
    }
}

/// Extension trait for statement traversal
///
/// Statement-kind nodes include blocks and declarations in typed positions
/// (function bodies, `for` initialisers), so visitors receive a [`NodeRef`]
/// and discriminate with [`NodeRef::kind`].
pub trait StmtExt {
    /// Walk the statement tree in pre-order
    ///
    /// Calls visitor on each statement before its children. Return Err to stop early.
    fn walk<'a, F, E>(&'a self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(NodeRef<'a>) -> Result<(), E>;

    /// Walk the statement tree in post-order
    fn walk_post<'a, F, E>(&'a self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(NodeRef<'a>) -> Result<(), E>;

    /// Find all statement-kind nodes matching a predicate
    fn find_statements<F>(&self, predicate: F) -> Vec<NodeRef<'_>>
    where
        F: Fn(&NodeRef<'_>) -> bool;

    /// Walk all expressions within this statement
    fn walk_expressions<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&LocatedExpr) -> Result<(), E>;

    /// Check if the statement can return from its enclosing function
    ///
    /// Returns made inside nested function declarations or arrow functions
    /// belong to those functions and do not count.
    fn can_exit_early(&self) -> bool;
}

impl StmtExt for LocatedStmt {
    fn walk<'a, F, E>(&'a self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(NodeRef<'a>) -> Result<(), E>,
    {
        self.as_node().walk(&mut |node| {
            if node.kind().is_stmt() {
                visitor(node)
            } else {
                Ok(())
            }
        })
    }

    fn walk_post<'a, F, E>(&'a self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(NodeRef<'a>) -> Result<(), E>,
    {
        self.as_node().walk_post(&mut |node| {
            if node.kind().is_stmt() {
                visitor(node)
            } else {
                Ok(())
            }
        })
    }

    fn find_statements<F>(&self, predicate: F) -> Vec<NodeRef<'_>>
    where
        F: Fn(&NodeRef<'_>) -> bool,
    {
        self.as_node()
            .find(|node| node.kind().is_stmt() && predicate(node))
    }

    fn walk_expressions<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&LocatedExpr) -> Result<(), E>,
    {
        self.as_node().walk(&mut |node| match node {
            NodeRef::Expr(expr) => visitor(expr),
            _ => Ok(()),
        })
    }

    fn can_exit_early(&self) -> bool {
        match &self.node {
            Stmt::FunDecl(_) => false,
            _ => contains_return(self.as_node()),
        }
    }
}

fn contains_return(node: NodeRef<'_>) -> bool {
    match node {
        NodeRef::Stmt(Located {
            node: Stmt::Return(_),
            ..
        }) => true,
        NodeRef::Stmt(Located {
            node: Stmt::FunDecl(_),
            ..
        })
        | NodeRef::Expr(Located {
            node: Expr::Arrow(_),
            ..
        }) => false,
        _ => node.children().into_iter().any(contains_return),
    }
}
