//! Syntax tree model for the WenCode language
//!
//! A parser produces a [`Program`]; everything downstream (formatters,
//! analyzers, code generators) consumes it read-only. Nodes are plain owned
//! data and therefore `Send + Sync`, so a finished tree can be shared across
//! threads behind an `Arc` without locking. Fields are public for tooling;
//! mutating a tree through `&mut` is only valid before it has been shared.

pub mod ast;
pub mod config;
pub mod debug;
pub mod error;
pub mod printer;
pub mod span;
pub mod validate;

pub use ast::*;
pub use config::*;
pub use error::{AstError, ErrorFormatter, ErrorKind, Result};
pub use printer::TreePrinter;
pub use span::{LineIndex, SourceLocation, Span};
pub use validate::Validator;
