//! Source positions attached to every syntax tree node
//!
//! A [`Span`] records both the human-facing position of a node's first
//! character (`line`, `column`, both 1-based) and the half-open character
//! range `[start, end)` it was derived from. Offsets count Unicode scalar
//! values, not bytes, so a CJK keyword advances the offset by one.

use crate::error::{AstError, ErrorKind, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Line/column position (both 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Positional metadata carried by every node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSpan", into = "RawSpan")]
pub struct Span {
    line: usize,
    column: usize,
    start: usize,
    end: usize,
}

impl Span {
    /// Build a span, rejecting inverted ranges and zero line/column values.
    pub fn new(line: usize, column: usize, start: usize, end: usize) -> Result<Self> {
        if start > end {
            return Err(AstError::new(
                ErrorKind::InvalidSpan,
                format!("span start {} is past its end {}", start, end),
            ));
        }
        if line == 0 || column == 0 {
            return Err(AstError::new(
                ErrorKind::InvalidSpan,
                format!("line and column are 1-based, got {}:{}", line, column),
            ));
        }
        Ok(Self {
            line,
            column,
            start,
            end,
        })
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `other` lies entirely within this span
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} [{}..{}]",
            self.line, self.column, self.start, self.end
        )
    }
}

/// Unvalidated wire form of [`Span`]
#[derive(Serialize, Deserialize)]
struct RawSpan {
    line: usize,
    column: usize,
    start: usize,
    end: usize,
}

impl TryFrom<RawSpan> for Span {
    type Error = AstError;

    fn try_from(raw: RawSpan) -> Result<Self> {
        Span::new(raw.line, raw.column, raw.start, raw.end)
    }
}

impl From<Span> for RawSpan {
    fn from(span: Span) -> Self {
        RawSpan {
            line: span.line,
            column: span.column,
            start: span.start,
            end: span.end,
        }
    }
}

/// Character-offset index over a source text
///
/// Maps offsets back to line/column and slices the exact text of a span.
#[derive(Debug, Clone)]
pub struct LineIndex<'src> {
    source: &'src str,
    /// Character offset at which each line begins
    line_starts: Vec<usize>,
    /// Byte position of every character, plus the total byte length
    byte_offsets: Vec<usize>,
}

impl<'src> LineIndex<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut line_starts = vec![0];
        let mut byte_offsets = Vec::with_capacity(source.len() + 1);

        for (char_idx, (byte_idx, ch)) in source.char_indices().enumerate() {
            byte_offsets.push(byte_idx);
            if ch == '\n' {
                line_starts.push(char_idx + 1);
            }
        }
        byte_offsets.push(source.len());

        Self {
            source,
            line_starts,
            byte_offsets,
        }
    }

    /// Number of characters in the source
    pub fn char_len(&self) -> usize {
        self.byte_offsets.len() - 1
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Line/column of a character offset. `char_len()` itself is valid and
    /// denotes the position just past the last character.
    pub fn location(&self, offset: usize) -> Result<SourceLocation> {
        if offset > self.char_len() {
            return Err(AstError::new(
                ErrorKind::OffsetOutOfRange,
                format!(
                    "offset {} is past the end of a {}-character source",
                    offset,
                    self.char_len()
                ),
            ));
        }

        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let column = offset - self.line_starts[line_idx] + 1;
        Ok(SourceLocation::new(line_idx + 1, column))
    }

    /// Span over `[start, end)` with line/column derived from `start`
    pub fn span(&self, start: usize, end: usize) -> Result<Span> {
        if end > self.char_len() {
            return Err(AstError::new(
                ErrorKind::OffsetOutOfRange,
                format!(
                    "span end {} is past the end of a {}-character source",
                    end,
                    self.char_len()
                ),
            ));
        }
        let location = self.location(start)?;
        Span::new(location.line, location.column, start, end)
    }

    /// Text of a 1-based line without its terminator
    pub fn line_text(&self, line: usize) -> Option<&'src str> {
        let first = *self.line_starts.get(line.checked_sub(1)?)?;
        let next = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.char_len() + 1);
        let start = self.byte_offsets[first];
        let end = self.byte_offsets[next - 1];
        self.source
            .get(start..end)
            .map(|text| text.strip_suffix('\r').unwrap_or(text))
    }

    /// Exact source text covered by `span`
    pub fn slice(&self, span: &Span) -> Option<&'src str> {
        let start = *self.byte_offsets.get(span.start())?;
        let end = *self.byte_offsets.get(span.end())?;
        self.source.get(start..end)
    }
}
