//! Statement AST node definitions
//!
//! This module contains all statement-related AST types including
//! declarations, control flow, and module import/export statements.

use super::{Ident, Located, LocatedExpr, StmtKind, StrLit, VarKind};
use nonempty::NonEmpty;
use serde::{Deserialize, Serialize};

/// Type alias for located statements
pub type LocatedStmt = Located<Stmt>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Stmt {
    #[serde(rename = "VariableDeclaration")]
    VarDecl(VarDeclStmt),
    #[serde(rename = "FunctionDeclaration")]
    FunDecl(FunDeclStmt),
    #[serde(rename = "BlockStatement")]
    Block(BlockStmt),
    #[serde(rename = "ExpressionStatement")]
    Expression(ExprStmt),
    #[serde(rename = "IfStatement")]
    If(IfStmt),
    #[serde(rename = "WhileStatement")]
    While(WhileStmt),
    #[serde(rename = "ForStatement")]
    For(ForStmt),
    #[serde(rename = "ReturnStatement")]
    Return(ReturnStmt),
    #[serde(rename = "BreakStatement")]
    Break,
    #[serde(rename = "ContinueStatement")]
    Continue,
    #[serde(rename = "ImportDeclaration")]
    Import(ImportDecl),
    #[serde(rename = "ExportDeclaration")]
    Export(ExportDecl),
}

impl Stmt {
    pub fn kind(&self) -> StmtKind {
        match self {
            Stmt::VarDecl(_) => StmtKind::VarDecl,
            Stmt::FunDecl(_) => StmtKind::FunDecl,
            Stmt::Block(_) => StmtKind::Block,
            Stmt::Expression(_) => StmtKind::Expression,
            Stmt::If(_) => StmtKind::If,
            Stmt::While(_) => StmtKind::While,
            Stmt::For(_) => StmtKind::For,
            Stmt::Return(_) => StmtKind::Return,
            Stmt::Break => StmtKind::Break,
            Stmt::Continue => StmtKind::Continue,
            Stmt::Import(_) => StmtKind::Import,
            Stmt::Export(_) => StmtKind::Export,
        }
    }

    /// Declarations are the statements an export may wrap
    pub fn is_declaration(&self) -> bool {
        matches!(self, Stmt::VarDecl(_) | Stmt::FunDecl(_))
    }
}

/// `令 x = 1, y;` / `常量 PI = 3.14159;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDeclStmt {
    pub kind: VarKind,
    pub declarations: NonEmpty<Located<VarDeclarator>>,
}

impl VarDeclStmt {
    pub fn new(kind: VarKind, declarations: NonEmpty<Located<VarDeclarator>>) -> Self {
        Self { kind, declarations }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDeclarator {
    pub id: Located<Ident>,
    pub init: Option<LocatedExpr>,
}

impl VarDeclarator {
    pub fn new(id: Located<Ident>, init: Option<LocatedExpr>) -> Self {
        Self { id, init }
    }
}

/// `函数 name(params) { body }`
///
/// Parameter names are kept in declaration order; duplicates are left for
/// later analysis to reject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunDeclStmt {
    pub id: Located<Ident>,
    pub params: Vec<Located<Ident>>,
    pub body: Located<BlockStmt>,
}

impl FunDeclStmt {
    pub fn new(id: Located<Ident>, params: Vec<Located<Ident>>, body: Located<BlockStmt>) -> Self {
        Self { id, params, body }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BlockStmt {
    pub body: Vec<LocatedStmt>,
}

impl BlockStmt {
    pub fn new(body: Vec<LocatedStmt>) -> Self {
        Self { body }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprStmt {
    pub expression: LocatedExpr,
}

impl ExprStmt {
    pub fn new(expression: LocatedExpr) -> Self {
        Self { expression }
    }
}

/// `如果 (test) { consequent } 否则 { alternate }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStmt {
    pub test: LocatedExpr,
    pub consequent: Box<LocatedStmt>,
    pub alternate: Option<Box<LocatedStmt>>,
}

impl IfStmt {
    pub fn new(test: LocatedExpr, consequent: LocatedStmt, alternate: Option<LocatedStmt>) -> Self {
        Self {
            test,
            consequent: Box::new(consequent),
            alternate: alternate.map(Box::new),
        }
    }
}

/// `当 (test) { body }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileStmt {
    pub test: LocatedExpr,
    pub body: Box<LocatedStmt>,
}

impl WhileStmt {
    pub fn new(test: LocatedExpr, body: LocatedStmt) -> Self {
        Self {
            test,
            body: Box::new(body),
        }
    }
}

/// Initialiser clause of a `for` loop
///
/// Encoded as the bare node; its `"type"` tells the two variants apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ForInit {
    VarDecl(Located<VarDeclStmt>),
    Expression(LocatedExpr),
}

/// `对于 (init; test; update) { body }`, every clause optional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForStmt {
    pub init: Option<ForInit>,
    pub test: Option<LocatedExpr>,
    pub update: Option<LocatedExpr>,
    pub body: Box<LocatedStmt>,
}

impl ForStmt {
    pub fn new(
        init: Option<ForInit>,
        test: Option<LocatedExpr>,
        update: Option<LocatedExpr>,
        body: LocatedStmt,
    ) -> Self {
        Self {
            init,
            test,
            update,
            body: Box::new(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStmt {
    pub argument: Option<LocatedExpr>,
}

impl ReturnStmt {
    pub fn new(argument: Option<LocatedExpr>) -> Self {
        Self { argument }
    }
}

/// `导入 { a, b } 从 './module';`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportDecl {
    pub specifiers: NonEmpty<Located<ImportSpecifier>>,
    pub source: Located<StrLit>,
}

impl ImportDecl {
    pub fn new(specifiers: NonEmpty<Located<ImportSpecifier>>, source: Located<StrLit>) -> Self {
        Self { specifiers, source }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSpecifier {
    pub imported: Located<Ident>,
    pub local: Located<Ident>,
}

impl ImportSpecifier {
    pub fn new(imported: Located<Ident>, local: Located<Ident>) -> Self {
        Self { imported, local }
    }

    /// Imported under its own name
    pub fn is_unaliased(&self) -> bool {
        self.imported.node == self.local.node
    }
}

/// `导出 func;` / `导出 default func;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDecl {
    pub declaration: Box<LocatedStmt>,
    #[serde(rename = "isDefault")]
    pub is_default: bool,
}

impl ExportDecl {
    pub fn new(declaration: LocatedStmt, is_default: bool) -> Self {
        Self {
            declaration: Box::new(declaration),
            is_default,
        }
    }
}
