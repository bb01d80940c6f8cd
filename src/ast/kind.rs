//! Discriminators and operator sets
//!
//! Every value set here is closed: a parser can only produce members of
//! these enums, and a consumer matching on one is forced by the compiler to
//! handle every member. `FromStr` is the single entry point from raw token
//! text, and rejects anything outside the set.

use crate::error::{IntoAstError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Statement discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StmtKind {
    VarDecl,
    FunDecl,
    Block,
    Expression,
    If,
    While,
    For,
    Return,
    Break,
    Continue,
    Import,
    Export,
}

impl StmtKind {
    pub const ALL: [StmtKind; 12] = [
        StmtKind::VarDecl,
        StmtKind::FunDecl,
        StmtKind::Block,
        StmtKind::Expression,
        StmtKind::If,
        StmtKind::While,
        StmtKind::For,
        StmtKind::Return,
        StmtKind::Break,
        StmtKind::Continue,
        StmtKind::Import,
        StmtKind::Export,
    ];

    /// Canonical node-type name, also used as the encoded `"type"` tag
    pub fn as_str(&self) -> &'static str {
        match self {
            StmtKind::VarDecl => "VariableDeclaration",
            StmtKind::FunDecl => "FunctionDeclaration",
            StmtKind::Block => "BlockStatement",
            StmtKind::Expression => "ExpressionStatement",
            StmtKind::If => "IfStatement",
            StmtKind::While => "WhileStatement",
            StmtKind::For => "ForStatement",
            StmtKind::Return => "ReturnStatement",
            StmtKind::Break => "BreakStatement",
            StmtKind::Continue => "ContinueStatement",
            StmtKind::Import => "ImportDeclaration",
            StmtKind::Export => "ExportDeclaration",
        }
    }
}

impl fmt::Display for StmtKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StmtKind {
    type Err = crate::error::AstError;

    fn from_str(s: &str) -> Result<Self> {
        StmtKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("'{}' is not a statement kind", s).into_unknown_kind())
    }
}

/// Expression discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKind {
    Binary,
    Unary,
    Assignment,
    Call,
    Member,
    Arrow,
    Conditional,
    Array,
    Object,
    Template,
    Identifier,
    Literal,
}

impl ExprKind {
    pub const ALL: [ExprKind; 12] = [
        ExprKind::Binary,
        ExprKind::Unary,
        ExprKind::Assignment,
        ExprKind::Call,
        ExprKind::Member,
        ExprKind::Arrow,
        ExprKind::Conditional,
        ExprKind::Array,
        ExprKind::Object,
        ExprKind::Template,
        ExprKind::Identifier,
        ExprKind::Literal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExprKind::Binary => "BinaryExpression",
            ExprKind::Unary => "UnaryExpression",
            ExprKind::Assignment => "AssignmentExpression",
            ExprKind::Call => "CallExpression",
            ExprKind::Member => "MemberExpression",
            ExprKind::Arrow => "ArrowFunctionExpression",
            ExprKind::Conditional => "ConditionalExpression",
            ExprKind::Array => "ArrayExpression",
            ExprKind::Object => "ObjectExpression",
            ExprKind::Template => "TemplateLiteral",
            ExprKind::Identifier => "Identifier",
            ExprKind::Literal => "Literal",
        }
    }
}

impl fmt::Display for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExprKind {
    type Err = crate::error::AstError;

    fn from_str(s: &str) -> Result<Self> {
        ExprKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("'{}' is not an expression kind", s).into_unknown_kind())
    }
}

/// Discriminator over every located node, including the root and the
/// auxiliary nodes that only occur inside a parent variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    Stmt(StmtKind),
    Expr(ExprKind),
    VariableDeclarator,
    ImportSpecifier,
    Property,
    TemplateElement,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::Stmt(kind) => kind.as_str(),
            NodeKind::Expr(kind) => kind.as_str(),
            NodeKind::VariableDeclarator => "VariableDeclarator",
            NodeKind::ImportSpecifier => "ImportSpecifier",
            NodeKind::Property => "Property",
            NodeKind::TemplateElement => "TemplateElement",
        }
    }

    pub fn is_stmt(&self) -> bool {
        matches!(self, NodeKind::Stmt(_))
    }

    pub fn is_expr(&self) -> bool {
        matches!(self, NodeKind::Expr(_))
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `let` / `const`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VarKind {
    #[serde(rename = "let")]
    Let,
    #[serde(rename = "const")]
    Const,
}

impl VarKind {
    pub const ALL: [VarKind; 2] = [VarKind::Let, VarKind::Const];

    pub fn as_str(&self) -> &'static str {
        match self {
            VarKind::Let => "let",
            VarKind::Const => "const",
        }
    }

    /// Native-language keyword introducing the declaration
    pub fn native_keyword(&self) -> &'static str {
        match self {
            VarKind::Let => "令",
            VarKind::Const => "常量",
        }
    }
}

impl fmt::Display for VarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VarKind {
    type Err = crate::error::AstError;

    /// Accepts both the symbolic and the native keyword
    fn from_str(s: &str) -> Result<Self> {
        VarKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s || kind.native_keyword() == s)
            .ok_or_else(|| format!("'{}' is not a declaration keyword", s).into_unknown_kind())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "%")]
    Modulo,
    #[serde(rename = "**")]
    Exponent,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = ">=")]
    GreaterEqual,
    #[serde(rename = "<=")]
    LessEqual,
    #[serde(rename = "==")]
    Equal,
    #[serde(rename = "!=")]
    NotEqual,
    #[serde(rename = "===")]
    StrictEqual,
    #[serde(rename = "!==")]
    StrictNotEqual,
    #[serde(rename = "&&")]
    And,
    #[serde(rename = "||")]
    Or,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 16] = [
        BinaryOp::Add,
        BinaryOp::Subtract,
        BinaryOp::Multiply,
        BinaryOp::Divide,
        BinaryOp::Modulo,
        BinaryOp::Exponent,
        BinaryOp::Greater,
        BinaryOp::Less,
        BinaryOp::GreaterEqual,
        BinaryOp::LessEqual,
        BinaryOp::Equal,
        BinaryOp::NotEqual,
        BinaryOp::StrictEqual,
        BinaryOp::StrictNotEqual,
        BinaryOp::And,
        BinaryOp::Or,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
            BinaryOp::Exponent => "**",
            BinaryOp::Greater => ">",
            BinaryOp::Less => "<",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::StrictEqual => "===",
            BinaryOp::StrictNotEqual => "!==",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or)
    }

    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinaryOp::Greater
                | BinaryOp::Less
                | BinaryOp::GreaterEqual
                | BinaryOp::LessEqual
                | BinaryOp::Equal
                | BinaryOp::NotEqual
                | BinaryOp::StrictEqual
                | BinaryOp::StrictNotEqual
        )
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BinaryOp {
    type Err = crate::error::AstError;

    fn from_str(s: &str) -> Result<Self> {
        BinaryOp::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| format!("'{}' is not a binary operator", s).into_unknown_operator())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "!")]
    Not,
    #[serde(rename = "~")]
    BitNot,
    /// Native-language logical negation keyword
    #[serde(rename = "非")]
    NativeNot,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 5] = [
        UnaryOp::Minus,
        UnaryOp::Plus,
        UnaryOp::Not,
        UnaryOp::BitNot,
        UnaryOp::NativeNot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Minus => "-",
            UnaryOp::Plus => "+",
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
            UnaryOp::NativeNot => "非",
        }
    }

    /// `!` and `非` share semantics and differ only in spelling
    pub fn is_logical_not(&self) -> bool {
        matches!(self, UnaryOp::Not | UnaryOp::NativeNot)
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnaryOp {
    type Err = crate::error::AstError;

    fn from_str(s: &str) -> Result<Self> {
        UnaryOp::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| format!("'{}' is not a unary operator", s).into_unknown_operator())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignOp {
    #[serde(rename = "=")]
    Assign,
    #[serde(rename = "+=")]
    AddAssign,
    #[serde(rename = "-=")]
    SubtractAssign,
    #[serde(rename = "*=")]
    MultiplyAssign,
    #[serde(rename = "/=")]
    DivideAssign,
    #[serde(rename = "%=")]
    ModuloAssign,
}

impl AssignOp {
    pub const ALL: [AssignOp; 6] = [
        AssignOp::Assign,
        AssignOp::AddAssign,
        AssignOp::SubtractAssign,
        AssignOp::MultiplyAssign,
        AssignOp::DivideAssign,
        AssignOp::ModuloAssign,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::AddAssign => "+=",
            AssignOp::SubtractAssign => "-=",
            AssignOp::MultiplyAssign => "*=",
            AssignOp::DivideAssign => "/=",
            AssignOp::ModuloAssign => "%=",
        }
    }

    /// Binary operator a compound assignment applies, `None` for plain `=`
    pub fn binary_op(&self) -> Option<BinaryOp> {
        match self {
            AssignOp::Assign => None,
            AssignOp::AddAssign => Some(BinaryOp::Add),
            AssignOp::SubtractAssign => Some(BinaryOp::Subtract),
            AssignOp::MultiplyAssign => Some(BinaryOp::Multiply),
            AssignOp::DivideAssign => Some(BinaryOp::Divide),
            AssignOp::ModuloAssign => Some(BinaryOp::Modulo),
        }
    }
}

impl fmt::Display for AssignOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssignOp {
    type Err = crate::error::AstError;

    fn from_str(s: &str) -> Result<Self> {
        AssignOp::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| format!("'{}' is not an assignment operator", s).into_unknown_operator())
    }
}
