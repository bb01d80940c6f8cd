//! Structural integrity checks over built trees
//!
//! The node types already rule out inconsistent discriminators and
//! ambiguous optional fields. What they cannot rule out is positional
//! nonsense: a child whose span escapes its parent, or a line/column that
//! does not match the offset it sits at. The validator walks a tree and
//! stops at the first such violation.

use crate::ast::{AsNode, NodeKind, NodeRef, Visit};
use crate::config::Config;
use crate::debug_println;
use crate::error::{AstError, ErrorKind, Result};
use crate::span::{LineIndex, Span};

/// Fail if any direct child of `node` lies outside its span
pub fn check_direct_children(node: NodeRef<'_>) -> Result<()> {
    let span = node.span();
    for child in node.children() {
        if !span.contains(&child.span()) {
            return Err(not_nested(node.kind(), span, child.kind(), child.span()));
        }
    }
    Ok(())
}

fn not_nested(parent_kind: NodeKind, parent: Span, child_kind: NodeKind, child: Span) -> AstError {
    AstError::new(
        ErrorKind::SpanNotNested,
        format!(
            "{} at [{}..{}] is not contained in its parent {}",
            child_kind,
            child.start(),
            child.end(),
            parent_kind
        ),
    )
    .with_span(child)
    .with_note(format!(
        "parent {} covers [{}..{}]",
        parent_kind,
        parent.start(),
        parent.end()
    ))
}

pub struct Validator<'v> {
    config: Config,
    source: Option<&'v LineIndex<'v>>,
}

impl<'v> Validator<'v> {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            source: None,
        }
    }

    /// Check positions against the source the tree was parsed from
    pub fn with_source(mut self, index: &'v LineIndex<'v>) -> Self {
        self.source = Some(index);
        self
    }

    /// Walk the whole tree below `node`, failing at the first violation
    pub fn validate<N: AsNode>(&self, node: &N) -> Result<()> {
        let mut checker = SpanChecker {
            validator: self,
            parents: Vec::new(),
        };
        node.as_node().accept(&mut checker).map_err(|err| {
            debug_println!("[validate] {}", err);
            err
        })
    }

    fn check_position(&self, kind: NodeKind, span: Span) -> Result<()> {
        let index = match self.source {
            Some(index) if self.config.check_positions => index,
            _ => return Ok(()),
        };

        if span.end() > index.char_len() {
            return Err(AstError::new(
                ErrorKind::OffsetOutOfRange,
                format!(
                    "{} ends at {} but the source has {} characters",
                    kind,
                    span.end(),
                    index.char_len()
                ),
            )
            .with_span(span));
        }

        let expected = index.location(span.start())?;
        if expected != span.location() {
            return Err(AstError::new(
                ErrorKind::PositionMismatch,
                format!(
                    "{} starts at offset {} which is {}, but records {}",
                    kind,
                    span.start(),
                    expected,
                    span.location()
                ),
            )
            .with_span(span));
        }
        Ok(())
    }
}

impl Default for Validator<'_> {
    fn default() -> Self {
        Self::new()
    }
}

struct SpanChecker<'c, 'v> {
    validator: &'c Validator<'v>,
    parents: Vec<(NodeKind, Span)>,
}

impl<'a, 'c, 'v> Visit<'a> for SpanChecker<'c, 'v> {
    type Error = AstError;

    fn enter(&mut self, node: NodeRef<'a>) -> Result<()> {
        let kind = node.kind();
        let span = node.span();

        if let Some(&(parent_kind, parent_span)) = self.parents.last() {
            if !parent_span.contains(&span) {
                return Err(not_nested(parent_kind, parent_span, kind, span));
            }
        }
        self.validator.check_position(kind, span)?;

        self.parents.push((kind, span));
        Ok(())
    }

    fn leave(&mut self, _node: NodeRef<'a>) -> Result<()> {
        self.parents.pop();
        Ok(())
    }
}
