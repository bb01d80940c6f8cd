//! Expression AST node definitions
//!
//! This module contains all expression-related AST types including
//! literals, operators, and the function, collection and template forms.

use super::{AssignOp, BinaryOp, BlockStmt, ExprKind, Located, StmtKind, UnaryOp};
use crate::error::{AstError, ErrorKind, Result};
use nonempty::NonEmpty;
use serde::{Deserialize, Serialize};

/// Type alias for located expressions
pub type LocatedExpr = Located<Expr>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expr {
    #[serde(rename = "BinaryExpression")]
    Binary(BinaryExpr),
    #[serde(rename = "UnaryExpression")]
    Unary(UnaryExpr),
    #[serde(rename = "AssignmentExpression")]
    Assignment(AssignmentExpr),
    #[serde(rename = "CallExpression")]
    Call(CallExpr),
    #[serde(rename = "MemberExpression")]
    Member(MemberExpr),
    #[serde(rename = "ArrowFunctionExpression")]
    Arrow(ArrowFunctionExpr),
    #[serde(rename = "ConditionalExpression")]
    Conditional(ConditionalExpr),
    #[serde(rename = "ArrayExpression")]
    Array(ArrayExpr),
    #[serde(rename = "ObjectExpression")]
    Object(ObjectExpr),
    #[serde(rename = "TemplateLiteral")]
    Template(TemplateLiteral),
    #[serde(rename = "Identifier")]
    Identifier(Ident),
    #[serde(rename = "Literal")]
    Literal(LiteralExpr),
}

impl Expr {
    pub fn kind(&self) -> ExprKind {
        match self {
            Expr::Binary(_) => ExprKind::Binary,
            Expr::Unary(_) => ExprKind::Unary,
            Expr::Assignment(_) => ExprKind::Assignment,
            Expr::Call(_) => ExprKind::Call,
            Expr::Member(_) => ExprKind::Member,
            Expr::Arrow(_) => ExprKind::Arrow,
            Expr::Conditional(_) => ExprKind::Conditional,
            Expr::Array(_) => ExprKind::Array,
            Expr::Object(_) => ExprKind::Object,
            Expr::Template(_) => ExprKind::Template,
            Expr::Identifier(_) => ExprKind::Identifier,
            Expr::Literal(_) => ExprKind::Literal,
        }
    }
}

/// A name; used both as an expression and as a binding in declarations
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ident {
    pub name: String,
}

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Bool(bool),
    Null,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LiteralExprRepr")]
pub struct LiteralExpr {
    pub value: LiteralValue,
    /// Source text exactly as written, quotes included
    pub raw: String,
}

#[derive(Deserialize)]
struct LiteralExprRepr {
    value: LiteralValue,
    raw: String,
}

impl From<LiteralExprRepr> for LiteralExpr {
    fn from(repr: LiteralExprRepr) -> Self {
        // JSON has no spelling for infinities or NaN, so they arrive as null
        let value = match repr.value {
            LiteralValue::Null => match repr.raw.parse::<f64>() {
                Ok(number) if !number.is_finite() => LiteralValue::Number(number),
                _ => LiteralValue::Null,
            },
            value => value,
        };
        Self {
            value,
            raw: repr.raw,
        }
    }
}

impl LiteralExpr {
    pub fn new(value: LiteralValue, raw: impl Into<String>) -> Self {
        Self {
            value,
            raw: raw.into(),
        }
    }

    pub fn number(value: f64, raw: impl Into<String>) -> Self {
        Self::new(LiteralValue::Number(value), raw)
    }

    pub fn string(value: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::new(LiteralValue::String(value.into()), raw)
    }

    pub fn bool(value: bool, raw: impl Into<String>) -> Self {
        Self::new(LiteralValue::Bool(value), raw)
    }

    pub fn null(raw: impl Into<String>) -> Self {
        Self::new(LiteralValue::Null, raw)
    }
}

/// A literal restricted to strings, for positions such as an import source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrLit {
    pub value: String,
    pub raw: String,
}

impl StrLit {
    pub fn new(value: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            raw: raw.into(),
        }
    }
}

impl From<StrLit> for LiteralExpr {
    fn from(lit: StrLit) -> Self {
        LiteralExpr::new(LiteralValue::String(lit.value), lit.raw)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub operator: BinaryOp,
    pub left: Box<LocatedExpr>,
    pub right: Box<LocatedExpr>,
}

impl BinaryExpr {
    pub fn new(operator: BinaryOp, left: LocatedExpr, right: LocatedExpr) -> Self {
        Self {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub operator: UnaryOp,
    pub prefix: bool,
    pub argument: Box<LocatedExpr>,
}

impl UnaryExpr {
    pub fn new(operator: UnaryOp, prefix: bool, argument: LocatedExpr) -> Self {
        Self {
            operator,
            prefix,
            argument: Box::new(argument),
        }
    }
}

/// Left-hand side of an assignment
///
/// Only names and member accesses can be assigned to; every other
/// expression shape is rejected when the target is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AssignTarget {
    #[serde(rename = "Identifier")]
    Identifier(Ident),
    #[serde(rename = "MemberExpression")]
    Member(MemberExpr),
}

impl AssignTarget {
    pub fn kind(&self) -> ExprKind {
        match self {
            AssignTarget::Identifier(_) => ExprKind::Identifier,
            AssignTarget::Member(_) => ExprKind::Member,
        }
    }

    /// Reinterpret an already-parsed expression as an assignment target
    pub fn try_from_expr(expr: LocatedExpr) -> Result<Located<AssignTarget>> {
        let span = expr.span;
        match expr.node {
            Expr::Identifier(ident) => Ok(Located::new(AssignTarget::Identifier(ident), span)),
            Expr::Member(member) => Ok(Located::new(AssignTarget::Member(member), span)),
            other => Err(AstError::new(
                ErrorKind::InvalidAssignmentTarget,
                format!("cannot assign to {}", other.kind()),
            )
            .with_span(span)
            .with_help("only identifiers and member accesses can be assigned")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentExpr {
    pub operator: AssignOp,
    pub left: Box<Located<AssignTarget>>,
    pub right: Box<LocatedExpr>,
}

impl AssignmentExpr {
    pub fn new(operator: AssignOp, left: Located<AssignTarget>, right: LocatedExpr) -> Self {
        Self {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    pub callee: Box<LocatedExpr>,
    pub arguments: Vec<LocatedExpr>,
}

impl CallExpr {
    pub fn new(callee: LocatedExpr, arguments: Vec<LocatedExpr>) -> Self {
        Self {
            callee: Box::new(callee),
            arguments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberExpr {
    pub object: Box<LocatedExpr>,
    pub property: Box<LocatedExpr>,
    /// `obj[prop]` when true, `obj.prop` when false
    pub computed: bool,
}

impl MemberExpr {
    pub fn new(object: LocatedExpr, property: LocatedExpr, computed: bool) -> Self {
        Self {
            object: Box::new(object),
            property: Box::new(property),
            computed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArrowBody {
    Expression(Box<LocatedExpr>),
    Block(Located<BlockStmt>),
}

impl ArrowBody {
    pub fn kind(&self) -> ArrowBodyKind {
        match self {
            ArrowBody::Expression(expr) => ArrowBodyKind::Expression(expr.node.kind()),
            ArrowBody::Block(_) => ArrowBodyKind::Block,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowBodyKind {
    Expression(ExprKind),
    Block,
}

impl ArrowBodyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArrowBodyKind::Expression(kind) => kind.as_str(),
            ArrowBodyKind::Block => StmtKind::Block.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowFunctionExpr {
    pub params: Vec<Located<Ident>>,
    pub body: ArrowBody,
}

impl ArrowFunctionExpr {
    pub fn new(params: Vec<Located<Ident>>, body: ArrowBody) -> Self {
        Self { params, body }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalExpr {
    pub test: Box<LocatedExpr>,
    pub consequent: Box<LocatedExpr>,
    pub alternate: Box<LocatedExpr>,
}

impl ConditionalExpr {
    pub fn new(test: LocatedExpr, consequent: LocatedExpr, alternate: LocatedExpr) -> Self {
        Self {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayExpr {
    /// `None` is a hole (`[1, , 3]`), distinct from a `null` literal
    pub elements: Vec<Option<LocatedExpr>>,
}

impl ArrayExpr {
    pub fn new(elements: Vec<Option<LocatedExpr>>) -> Self {
        Self { elements }
    }

    pub fn hole_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_none()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub key: LocatedExpr,
    pub value: LocatedExpr,
    pub computed: bool,
    pub shorthand: bool,
}

impl Property {
    pub fn new(key: LocatedExpr, value: LocatedExpr, computed: bool, shorthand: bool) -> Self {
        Self {
            key,
            value,
            computed,
            shorthand,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectExpr {
    pub properties: Vec<Located<Property>>,
}

impl ObjectExpr {
    pub fn new(properties: Vec<Located<Property>>) -> Self {
        Self { properties }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateElement {
    pub value: String,
    pub tail: bool,
}

impl TemplateElement {
    pub fn new(value: impl Into<String>, tail: bool) -> Self {
        Self {
            value: value.into(),
            tail,
        }
    }
}

/// `` `text ${expr} text` ``
///
/// Text segments and embedded expressions interleave, so there is always
/// exactly one more quasi than there are expressions, and only the final
/// quasi carries `tail`. Fields stay private to keep that true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TemplateLiteralRepr", into = "TemplateLiteralRepr")]
pub struct TemplateLiteral {
    quasis: NonEmpty<Located<TemplateElement>>,
    expressions: Vec<LocatedExpr>,
}

impl TemplateLiteral {
    pub fn new(
        quasis: NonEmpty<Located<TemplateElement>>,
        expressions: Vec<LocatedExpr>,
    ) -> Result<Self> {
        if quasis.len() != expressions.len() + 1 {
            return Err(AstError::new(
                ErrorKind::MalformedTemplate,
                format!(
                    "{} text segments cannot interleave {} expressions",
                    quasis.len(),
                    expressions.len()
                ),
            )
            .with_span(quasis.first().span));
        }

        let last = quasis.len() - 1;
        for (idx, quasi) in quasis.iter().enumerate() {
            if quasi.node.tail != (idx == last) {
                let message = if quasi.node.tail {
                    format!("segment {} is marked tail but is not the last", idx)
                } else {
                    format!("final segment {} is not marked tail", idx)
                };
                return Err(AstError::new(ErrorKind::MalformedTemplate, message)
                    .with_span(quasi.span));
            }
        }

        Ok(Self {
            quasis,
            expressions,
        })
    }

    pub fn quasis(&self) -> &NonEmpty<Located<TemplateElement>> {
        &self.quasis
    }

    pub fn expressions(&self) -> &[LocatedExpr] {
        &self.expressions
    }

    pub fn into_parts(self) -> (NonEmpty<Located<TemplateElement>>, Vec<LocatedExpr>) {
        (self.quasis, self.expressions)
    }
}

#[derive(Clone, Serialize, Deserialize)]
struct TemplateLiteralRepr {
    quasis: NonEmpty<Located<TemplateElement>>,
    expressions: Vec<LocatedExpr>,
}

impl TryFrom<TemplateLiteralRepr> for TemplateLiteral {
    type Error = AstError;

    fn try_from(repr: TemplateLiteralRepr) -> Result<Self> {
        TemplateLiteral::new(repr.quasis, repr.expressions)
    }
}

impl From<TemplateLiteral> for TemplateLiteralRepr {
    fn from(template: TemplateLiteral) -> Self {
        TemplateLiteralRepr {
            quasis: template.quasis,
            expressions: template.expressions,
        }
    }
}
