//! Uniform handle over every located node
//!
//! [`NodeRef`] erases the difference between the root, statements,
//! expressions and the auxiliary nodes that only appear inside a parent
//! (declarators, specifiers, properties, template segments). Each handle
//! reports its kind and span and enumerates its direct children in field
//! order, which is all a generic traversal needs.

use super::*;
use crate::span::Span;

#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Program(&'a Program),
    Stmt(&'a LocatedStmt),
    Expr(&'a LocatedExpr),
    /// Block in a typed position (function or arrow body)
    Block(&'a Located<BlockStmt>),
    /// Variable declaration in a `for` initialiser
    VarDecl(&'a Located<VarDeclStmt>),
    Declarator(&'a Located<VarDeclarator>),
    /// Binding identifier: declared names, parameters, import names
    Binding(&'a Located<Ident>),
    ImportSpecifier(&'a Located<ImportSpecifier>),
    /// String literal in a typed position (import source)
    Source(&'a Located<StrLit>),
    AssignTarget(&'a Located<AssignTarget>),
    Property(&'a Located<Property>),
    TemplateElement(&'a Located<TemplateElement>),
}

impl<'a> NodeRef<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::Program(_) => NodeKind::Program,
            NodeRef::Stmt(stmt) => NodeKind::Stmt(stmt.node.kind()),
            NodeRef::Expr(expr) => NodeKind::Expr(expr.node.kind()),
            NodeRef::Block(_) => NodeKind::Stmt(StmtKind::Block),
            NodeRef::VarDecl(_) => NodeKind::Stmt(StmtKind::VarDecl),
            NodeRef::Declarator(_) => NodeKind::VariableDeclarator,
            NodeRef::Binding(_) => NodeKind::Expr(ExprKind::Identifier),
            NodeRef::ImportSpecifier(_) => NodeKind::ImportSpecifier,
            NodeRef::Source(_) => NodeKind::Expr(ExprKind::Literal),
            NodeRef::AssignTarget(target) => NodeKind::Expr(target.node.kind()),
            NodeRef::Property(_) => NodeKind::Property,
            NodeRef::TemplateElement(_) => NodeKind::TemplateElement,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            NodeRef::Program(program) => program.span,
            NodeRef::Stmt(stmt) => stmt.span,
            NodeRef::Expr(expr) => expr.span,
            NodeRef::Block(block) => block.span,
            NodeRef::VarDecl(decl) => decl.span,
            NodeRef::Declarator(declarator) => declarator.span,
            NodeRef::Binding(ident) => ident.span,
            NodeRef::ImportSpecifier(specifier) => specifier.span,
            NodeRef::Source(source) => source.span,
            NodeRef::AssignTarget(target) => target.span,
            NodeRef::Property(property) => property.span,
            NodeRef::TemplateElement(element) => element.span,
        }
    }

    /// Direct children in field order
    ///
    /// Absent optional children and array holes are skipped; template
    /// segments and embedded expressions come back interleaved in source
    /// order.
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        match *self {
            NodeRef::Program(program) => program.body.iter().map(NodeRef::Stmt).collect(),
            NodeRef::Stmt(stmt) => stmt_children(&stmt.node),
            NodeRef::Expr(expr) => expr_children(&expr.node),
            NodeRef::Block(block) => block.node.body.iter().map(NodeRef::Stmt).collect(),
            NodeRef::VarDecl(decl) => var_decl_children(&decl.node),
            NodeRef::Declarator(declarator) => {
                let mut children = vec![NodeRef::Binding(&declarator.node.id)];
                children.extend(declarator.node.init.as_ref().map(NodeRef::Expr));
                children
            }
            NodeRef::ImportSpecifier(specifier) => vec![
                NodeRef::Binding(&specifier.node.imported),
                NodeRef::Binding(&specifier.node.local),
            ],
            NodeRef::AssignTarget(target) => match &target.node {
                AssignTarget::Identifier(_) => vec![],
                AssignTarget::Member(member) => member_children(member),
            },
            NodeRef::Property(property) => vec![
                NodeRef::Expr(&property.node.key),
                NodeRef::Expr(&property.node.value),
            ],
            NodeRef::Binding(_) | NodeRef::Source(_) | NodeRef::TemplateElement(_) => vec![],
        }
    }

    /// Scalar payload worth showing next to the kind in a dump
    pub fn detail(&self) -> Option<String> {
        match self {
            NodeRef::Stmt(stmt) => match &stmt.node {
                Stmt::VarDecl(decl) => Some(decl.kind.to_string()),
                Stmt::Export(export) if export.is_default => Some("default".to_string()),
                _ => None,
            },
            NodeRef::VarDecl(decl) => Some(decl.node.kind.to_string()),
            NodeRef::Expr(expr) => match &expr.node {
                Expr::Binary(binary) => Some(binary.operator.to_string()),
                Expr::Unary(unary) => Some(unary.operator.to_string()),
                Expr::Assignment(assignment) => Some(assignment.operator.to_string()),
                Expr::Member(member) if member.computed => Some("computed".to_string()),
                Expr::Identifier(ident) => Some(ident.name.clone()),
                Expr::Literal(literal) => Some(literal.raw.clone()),
                _ => None,
            },
            NodeRef::Binding(ident) => Some(ident.node.name.clone()),
            NodeRef::Source(source) => Some(source.node.raw.clone()),
            NodeRef::AssignTarget(target) => match &target.node {
                AssignTarget::Identifier(ident) => Some(ident.name.clone()),
                AssignTarget::Member(member) if member.computed => Some("computed".to_string()),
                AssignTarget::Member(_) => None,
            },
            NodeRef::Property(property) => match (property.node.computed, property.node.shorthand) {
                (true, _) => Some("computed".to_string()),
                (false, true) => Some("shorthand".to_string()),
                (false, false) => None,
            },
            NodeRef::TemplateElement(element) => Some(if element.node.tail {
                format!("{:?} tail", element.node.value)
            } else {
                format!("{:?}", element.node.value)
            }),
            _ => None,
        }
    }

    /// Kind name followed by the detail, if any
    pub fn label(&self) -> String {
        match self.detail() {
            Some(detail) => format!("{} {}", self.kind(), detail),
            None => self.kind().to_string(),
        }
    }
}

fn stmt_children(stmt: &Stmt) -> Vec<NodeRef<'_>> {
    match stmt {
        Stmt::VarDecl(decl) => var_decl_children(decl),
        Stmt::FunDecl(fun) => {
            let mut children = vec![NodeRef::Binding(&fun.id)];
            children.extend(fun.params.iter().map(NodeRef::Binding));
            children.push(NodeRef::Block(&fun.body));
            children
        }
        Stmt::Block(block) => block.body.iter().map(NodeRef::Stmt).collect(),
        Stmt::Expression(expr_stmt) => vec![NodeRef::Expr(&expr_stmt.expression)],
        Stmt::If(if_stmt) => {
            let mut children = vec![
                NodeRef::Expr(&if_stmt.test),
                NodeRef::Stmt(&if_stmt.consequent),
            ];
            children.extend(if_stmt.alternate.as_deref().map(NodeRef::Stmt));
            children
        }
        Stmt::While(while_stmt) => vec![
            NodeRef::Expr(&while_stmt.test),
            NodeRef::Stmt(&while_stmt.body),
        ],
        Stmt::For(for_stmt) => {
            let mut children = Vec::with_capacity(4);
            match &for_stmt.init {
                Some(ForInit::VarDecl(decl)) => children.push(NodeRef::VarDecl(decl)),
                Some(ForInit::Expression(expr)) => children.push(NodeRef::Expr(expr)),
                None => {}
            }
            children.extend(for_stmt.test.as_ref().map(NodeRef::Expr));
            children.extend(for_stmt.update.as_ref().map(NodeRef::Expr));
            children.push(NodeRef::Stmt(&for_stmt.body));
            children
        }
        Stmt::Return(ret) => ret.argument.iter().map(NodeRef::Expr).collect(),
        Stmt::Break | Stmt::Continue => vec![],
        Stmt::Import(import) => {
            let mut children: Vec<_> = import
                .specifiers
                .iter()
                .map(NodeRef::ImportSpecifier)
                .collect();
            children.push(NodeRef::Source(&import.source));
            children
        }
        Stmt::Export(export) => vec![NodeRef::Stmt(&export.declaration)],
    }
}

fn var_decl_children(decl: &VarDeclStmt) -> Vec<NodeRef<'_>> {
    decl.declarations.iter().map(NodeRef::Declarator).collect()
}

fn member_children(member: &MemberExpr) -> Vec<NodeRef<'_>> {
    vec![
        NodeRef::Expr(&member.object),
        NodeRef::Expr(&member.property),
    ]
}

fn expr_children(expr: &Expr) -> Vec<NodeRef<'_>> {
    match expr {
        Expr::Binary(binary) => vec![NodeRef::Expr(&binary.left), NodeRef::Expr(&binary.right)],
        Expr::Unary(unary) => vec![NodeRef::Expr(&unary.argument)],
        Expr::Assignment(assignment) => vec![
            NodeRef::AssignTarget(&assignment.left),
            NodeRef::Expr(&assignment.right),
        ],
        Expr::Call(call) => {
            let mut children = vec![NodeRef::Expr(&call.callee)];
            children.extend(call.arguments.iter().map(NodeRef::Expr));
            children
        }
        Expr::Member(member) => member_children(member),
        Expr::Arrow(arrow) => {
            let mut children: Vec<_> = arrow.params.iter().map(NodeRef::Binding).collect();
            children.push(match &arrow.body {
                ArrowBody::Expression(body) => NodeRef::Expr(body),
                ArrowBody::Block(block) => NodeRef::Block(block),
            });
            children
        }
        Expr::Conditional(conditional) => vec![
            NodeRef::Expr(&conditional.test),
            NodeRef::Expr(&conditional.consequent),
            NodeRef::Expr(&conditional.alternate),
        ],
        Expr::Array(array) => array.elements.iter().flatten().map(NodeRef::Expr).collect(),
        Expr::Object(object) => object.properties.iter().map(NodeRef::Property).collect(),
        Expr::Template(template) => {
            let mut children = Vec::with_capacity(template.quasis().len() * 2);
            let mut expressions = template.expressions().iter();
            for quasi in template.quasis().iter() {
                children.push(NodeRef::TemplateElement(quasi));
                if let Some(expr) = expressions.next() {
                    children.push(NodeRef::Expr(expr));
                }
            }
            children
        }
        Expr::Identifier(_) | Expr::Literal(_) => vec![],
    }
}

/// Anything that can be viewed as a [`NodeRef`]
pub trait AsNode {
    fn as_node(&self) -> NodeRef<'_>;
}

impl AsNode for Program {
    fn as_node(&self) -> NodeRef<'_> {
        NodeRef::Program(self)
    }
}

impl AsNode for LocatedStmt {
    fn as_node(&self) -> NodeRef<'_> {
        NodeRef::Stmt(self)
    }
}

impl AsNode for LocatedExpr {
    fn as_node(&self) -> NodeRef<'_> {
        NodeRef::Expr(self)
    }
}

impl AsNode for Located<BlockStmt> {
    fn as_node(&self) -> NodeRef<'_> {
        NodeRef::Block(self)
    }
}

impl AsNode for Located<VarDeclStmt> {
    fn as_node(&self) -> NodeRef<'_> {
        NodeRef::VarDecl(self)
    }
}

impl AsNode for Located<VarDeclarator> {
    fn as_node(&self) -> NodeRef<'_> {
        NodeRef::Declarator(self)
    }
}

impl AsNode for Located<Ident> {
    fn as_node(&self) -> NodeRef<'_> {
        NodeRef::Binding(self)
    }
}

impl AsNode for Located<ImportSpecifier> {
    fn as_node(&self) -> NodeRef<'_> {
        NodeRef::ImportSpecifier(self)
    }
}

impl AsNode for Located<StrLit> {
    fn as_node(&self) -> NodeRef<'_> {
        NodeRef::Source(self)
    }
}

impl AsNode for Located<AssignTarget> {
    fn as_node(&self) -> NodeRef<'_> {
        NodeRef::AssignTarget(self)
    }
}

impl AsNode for Located<Property> {
    fn as_node(&self) -> NodeRef<'_> {
        NodeRef::Property(self)
    }
}

impl AsNode for Located<TemplateElement> {
    fn as_node(&self) -> NodeRef<'_> {
        NodeRef::TemplateElement(self)
    }
}

impl<'a> AsNode for NodeRef<'a> {
    fn as_node(&self) -> NodeRef<'_> {
        *self
    }
}
