//! Syntax tree type definitions for WenCode
//!
//! Statements and expressions are closed sum types, so a consumer that
//! matches on [`Stmt`] or [`Expr`] without a wildcard arm is checked by the
//! compiler to handle every variant. Every node is wrapped in [`Located`],
//! which gives all variants the same positional contract.

pub mod codec;
mod expr;
mod kind;
mod node;
pub mod query;
mod stmt;
mod traversal;

pub use expr::*;
pub use kind::*;
pub use node::{AsNode, NodeRef};
pub use stmt::*;
pub use traversal::{ExprExt, StmtExt, Visit};

pub use nonempty::NonEmpty;

use crate::error::Result;
use crate::span::Span;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Discriminator written next to a located payload
///
/// [`Stmt`], [`Expr`] and [`AssignTarget`] write their own `"type"`, so they
/// keep the default. Payloads that sit bare in typed positions name theirs.
pub trait NodeType {
    const TYPE: Option<&'static str> = None;
}

impl NodeType for Stmt {}
impl NodeType for Expr {}
impl NodeType for AssignTarget {}

macro_rules! node_type {
    ($($payload:ty => $name:expr),* $(,)?) => {
        $(impl NodeType for $payload {
            const TYPE: Option<&'static str> = Some($name);
        })*
    };
}

node_type! {
    Ident => "Identifier",
    BlockStmt => "BlockStatement",
    VarDeclStmt => "VariableDeclaration",
    VarDeclarator => "VariableDeclarator",
    ImportSpecifier => "ImportSpecifier",
    Property => "Property",
    TemplateElement => "TemplateElement",
    StrLit => "Literal",
}

/// A wrapper for AST nodes that includes source location information
///
/// On the wire the discriminator, the node's own fields and the span's four
/// fields share one flat object.
#[derive(Debug, Clone, PartialEq)]
pub struct Located<T> {
    pub node: T,
    pub span: Span,
}

impl<T: Serialize + NodeType> Serialize for Located<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Wire<'a, T> {
            #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
            tag: Option<&'static str>,
            #[serde(flatten)]
            node: &'a T,
            #[serde(flatten)]
            span: &'a Span,
        }

        Wire {
            tag: T::TYPE,
            node: &self.node,
            span: &self.span,
        }
        .serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de> + NodeType> Deserialize<'de> for Located<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct SelfTagged<T> {
            #[serde(flatten)]
            node: T,
            #[serde(flatten)]
            span: Span,
        }

        #[derive(Deserialize)]
        struct Tagged<T> {
            #[serde(rename = "type")]
            tag: String,
            #[serde(flatten)]
            node: T,
            #[serde(flatten)]
            span: Span,
        }

        match T::TYPE {
            None => {
                let SelfTagged { node, span } = SelfTagged::deserialize(deserializer)?;
                Ok(Located::new(node, span))
            }
            Some(expected) => {
                let Tagged { tag, node, span } = Tagged::deserialize(deserializer)?;
                if tag != expected {
                    return Err(de::Error::custom(format!(
                        "expected a {} node, found {}",
                        expected, tag
                    )));
                }
                Ok(Located::new(node, span))
            }
        }
    }
}

impl<T> Located<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Located<U> {
        Located::new(f(self.node), self.span)
    }
}

impl<T> Located<T>
where
    Located<T>: AsNode,
{
    /// Construct a node, failing if any direct child lies outside `span`
    pub fn checked(node: T, span: Span) -> Result<Self> {
        let located = Self::new(node, span);
        crate::validate::check_direct_children(located.as_node())?;
        Ok(located)
    }
}

/// Root of a parsed source file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Program")]
pub struct Program {
    pub body: Vec<LocatedStmt>,
    #[serde(flatten)]
    pub span: Span,
}

impl Program {
    pub fn new(body: Vec<LocatedStmt>, span: Span) -> Self {
        Self { body, span }
    }

    pub fn checked(body: Vec<LocatedStmt>, span: Span) -> Result<Self> {
        let program = Self::new(body, span);
        crate::validate::check_direct_children(program.as_node())?;
        Ok(program)
    }

    pub fn to_json(&self) -> Result<String> {
        codec::encode(self)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        codec::decode(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn at(start: usize, end: usize) -> Span {
        Span::new(1, start + 1, start, end).unwrap()
    }

    fn name(n: &str, start: usize) -> LocatedExpr {
        Located::new(Expr::Identifier(Ident::new(n)), at(start, start + n.len()))
    }

    #[test]
    fn test_checked_accepts_nested_children() {
        // f(a)
        let call = Located::checked(
            Expr::Call(CallExpr::new(name("f", 0), vec![name("a", 2)])),
            at(0, 4),
        );
        assert!(call.is_ok());
    }

    #[test]
    fn test_checked_rejects_escaping_child() {
        let err = Located::checked(
            Expr::Call(CallExpr::new(name("f", 0), vec![name("a", 6)])),
            at(0, 4),
        )
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::SpanNotNested);
        assert_eq!(err.context.span, Some(at(6, 7)));
    }

    #[test]
    fn test_program_checked() {
        let stmt = Located::new(Stmt::Break, at(3, 9));
        assert!(Program::checked(vec![stmt.clone()], at(0, 9)).is_ok());
        assert!(Program::checked(vec![stmt], at(0, 5)).is_err());
    }

    #[test]
    fn test_map_keeps_span() {
        let located = Located::new(Ident::new("x"), at(4, 5));
        let mapped = located.map(|ident| ident.name.len());
        assert_eq!(mapped.node, 1);
        assert_eq!(mapped.span, at(4, 5));
    }
}
