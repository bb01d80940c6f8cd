#![allow(dead_code)]

pub mod error_assertions;

use wencode_ast::{
    Expr, Ident, LineIndex, LiteralExpr, Located, LocatedExpr, LocatedStmt, Program, Span, Stmt,
};

/// Source text plus helpers that build spans by locating substrings in it
///
/// Every span produced here has its line/column derived from the source,
/// so trees built from it pass position validation.
pub struct Source<'s> {
    pub text: &'s str,
    pub index: LineIndex<'s>,
}

impl<'s> Source<'s> {
    pub fn new(text: &'s str) -> Self {
        Self {
            text,
            index: LineIndex::new(text),
        }
    }

    /// Character offset of the `nth` (0-based) occurrence of `needle`
    pub fn offset_of(&self, needle: &str, nth: usize) -> usize {
        let (byte_idx, _) = self
            .text
            .match_indices(needle)
            .nth(nth)
            .unwrap_or_else(|| panic!("{:?} occurs fewer than {} times", needle, nth + 1));
        self.text[..byte_idx].chars().count()
    }

    pub fn span(&self, start: usize, end: usize) -> Span {
        self.index.span(start, end).unwrap()
    }

    /// Span covering the `nth` occurrence of `needle`
    pub fn span_of(&self, needle: &str, nth: usize) -> Span {
        let start = self.offset_of(needle, nth);
        self.span(start, start + needle.chars().count())
    }

    /// Span from the start of `first` to the end of `last`
    pub fn cover(&self, first: Span, last: Span) -> Span {
        self.span(first.start(), last.end())
    }

    /// Span of the whole source
    pub fn all(&self) -> Span {
        self.span(0, self.index.char_len())
    }

    pub fn ident(&self, name: &str, nth: usize) -> LocatedExpr {
        Located::new(Expr::Identifier(Ident::new(name)), self.span_of(name, nth))
    }

    pub fn binding(&self, name: &str, nth: usize) -> Located<Ident> {
        Located::new(Ident::new(name), self.span_of(name, nth))
    }

    pub fn number(&self, raw: &str, nth: usize) -> LocatedExpr {
        let value: f64 = raw.parse().unwrap();
        Located::new(
            Expr::Literal(LiteralExpr::number(value, raw)),
            self.span_of(raw, nth),
        )
    }

    pub fn program(&self, body: Vec<LocatedStmt>) -> Program {
        Program::new(body, self.all())
    }
}

/// Node positioned at a single-line offset range, for trees that never
/// meet a source text
pub fn at(start: usize, end: usize) -> Span {
    Span::new(1, start + 1, start, end).unwrap()
}

pub fn loc(expr: Expr) -> LocatedExpr {
    Located::new(expr, at(0, 0))
}

pub fn loc_stmt(stmt: Stmt) -> LocatedStmt {
    Located::new(stmt, at(0, 0))
}

pub fn name(n: &str) -> LocatedExpr {
    loc(Expr::Identifier(Ident::new(n)))
}

pub fn int(n: i64) -> LocatedExpr {
    loc(Expr::Literal(LiteralExpr::number(n as f64, n.to_string())))
}

/// Decode what was encoded, asserting the tree survives unchanged
pub fn assert_round_trip(program: &Program) {
    let json = program.to_json().unwrap();
    let decoded = Program::from_json(&json).unwrap();
    assert_eq!(&decoded, program, "round trip changed the tree:\n{}", json);
}
