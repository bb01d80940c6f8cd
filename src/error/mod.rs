//! Error type hierarchy for the syntax tree layer
//!
//! The tree is pure data, so the only failures are structural: a node
//! built with inconsistent positions or shape, a discriminator or operator
//! outside its closed set, or an encoded tree that cannot be decoded.

mod conversions;

pub use conversions::IntoAstError;

use crate::span::{LineIndex, Span};
use colored::*;
use std::fmt;

/// Error context providing additional information
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub span: Option<Span>,
    pub note: Option<String>,
    pub help: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Main error type for the syntax tree layer
#[derive(Debug, Clone)]
pub struct AstError {
    pub kind: ErrorKind,
    pub message: String,
    pub context: ErrorContext,
}

impl AstError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: ErrorContext::new(),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.context.span = Some(span);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.context.note = Some(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.context.help = Some(help.into());
        self
    }

    /// Structural errors signal a defect in whoever built the tree
    pub fn is_structural(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::InvalidSpan
                | ErrorKind::SpanNotNested
                | ErrorKind::PositionMismatch
                | ErrorKind::MalformedTemplate
                | ErrorKind::InvalidAssignmentTarget
        )
    }
}

/// Categories of errors that can occur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Structural invariants
    InvalidSpan,
    SpanNotNested,
    PositionMismatch,
    OffsetOutOfRange,
    MalformedTemplate,
    InvalidAssignmentTarget,

    // Closed value sets
    UnknownKind,
    UnknownOperator,

    // Encoding
    UnsupportedVersion,
    Serialization,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidSpan => "invalid span",
            ErrorKind::SpanNotNested => "span not nested in parent",
            ErrorKind::PositionMismatch => "position mismatch",
            ErrorKind::OffsetOutOfRange => "offset out of range",
            ErrorKind::MalformedTemplate => "malformed template literal",
            ErrorKind::InvalidAssignmentTarget => "invalid assignment target",
            ErrorKind::UnknownKind => "unknown node kind",
            ErrorKind::UnknownOperator => "unknown operator",
            ErrorKind::UnsupportedVersion => "unsupported AST version",
            ErrorKind::Serialization => "serialization error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context.span {
            Some(span) => write!(f, "{}: {}: {}", span, self.kind, self.message)?,
            None => write!(f, "{}: {}", self.kind, self.message)?,
        }

        if let Some(note) = &self.context.note {
            write!(f, "\nnote: {}", note)?;
        }

        if let Some(help) = &self.context.help {
            write!(f, "\nhelp: {}", help)?;
        }

        Ok(())
    }
}

impl std::error::Error for AstError {}

/// Result type for syntax tree operations
pub type Result<T> = std::result::Result<T, AstError>;

/// Renders an error together with the source line it points at
pub struct ErrorFormatter<'a> {
    error: &'a AstError,
    source: &'a LineIndex<'a>,
    filename: Option<&'a str>,
    use_color: bool,
}

impl<'a> ErrorFormatter<'a> {
    pub fn new(error: &'a AstError, source: &'a LineIndex<'a>) -> Self {
        Self {
            error,
            source,
            filename: None,
            use_color: true,
        }
    }

    pub fn with_filename(mut self, filename: &'a str) -> Self {
        self.filename = Some(filename);
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn format(&self) -> String {
        let mut output = String::new();

        if let Some(span) = &self.error.context.span {
            let location = match self.filename {
                Some(filename) => format!("{}:{}", filename, span.location()),
                None => span.location().to_string(),
            };
            output.push_str(&self.paint(location, |s| s.bold()));
            output.push_str(": ");
        }

        let kind = self.paint(self.error.kind.to_string(), |s| s.red().bold());
        output.push_str(&format!("{}: {}\n", kind, self.error.message));

        if let Some(snippet) = self.error.context.span.and_then(|span| self.snippet(&span)) {
            output.push_str(&snippet);
        }

        if let Some(note) = &self.error.context.note {
            let label = self.paint("note".to_string(), |s| s.blue().bold());
            output.push_str(&format!("\n{}: {}", label, note));
        }

        if let Some(help) = &self.error.context.help {
            let label = self.paint("help".to_string(), |s| s.green().bold());
            output.push_str(&format!("\n{}: {}", label, help));
        }

        output
    }

    fn paint(&self, text: String, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.use_color {
            style(&text).to_string()
        } else {
            text
        }
    }

    fn snippet(&self, span: &Span) -> Option<String> {
        let line = self.source.line_text(span.line())?;
        let line_num = span.line().to_string();
        let gutter = " ".repeat(line_num.len() + 1);
        let bar = self.paint("|".to_string(), |s| s.blue());

        // Underline up to the end of the first line only
        let line_len = line.chars().count();
        let first_col = span.column().min(line_len + 1);
        let width = span.len().min(line_len + 1 - first_col).max(1);
        let pointer = self.paint("^".repeat(width), |s| s.red().bold());

        Some(format!(
            "{} {} {}\n{}{} {}{}",
            self.paint(line_num, |s| s.blue().bold()),
            bar,
            line,
            gutter,
            bar,
            " ".repeat(first_col - 1),
            pointer
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_span_and_note() {
        let span = Span::new(2, 5, 14, 20).unwrap();
        let err = AstError::new(ErrorKind::SpanNotNested, "Identifier escapes CallExpression")
            .with_span(span)
            .with_note("parent covers 10..18");
        assert_eq!(
            err.to_string(),
            "2:5 [14..20]: span not nested in parent: Identifier escapes CallExpression\n\
             note: parent covers 10..18"
        );
    }

    #[test]
    fn test_display_without_span() {
        let err = AstError::new(ErrorKind::UnknownOperator, "'<>' is not a binary operator")
            .with_help("use '!=' instead");
        assert_eq!(
            err.to_string(),
            "unknown operator: '<>' is not a binary operator\nhelp: use '!=' instead"
        );
    }

    #[test]
    fn test_formatter_points_at_span() {
        let index = LineIndex::new("令 x = 1;\n返回 x + ;");
        let err = AstError::new(ErrorKind::SpanNotNested, "BinaryExpression escapes its parent")
            .with_span(index.span(12, 15).unwrap())
            .with_help("rebuild the parent span");
        let out = ErrorFormatter::new(&err, &index)
            .with_filename("main.wen")
            .with_color(false)
            .format();
        assert_eq!(
            out,
            "main.wen:2:4: span not nested in parent: BinaryExpression escapes its parent\n\
             2 | 返回 x + ;\n  |    ^^^\n\
             help: rebuild the parent span"
        );
    }

    #[test]
    fn test_structural_classification() {
        assert!(AstError::new(ErrorKind::SpanNotNested, "").is_structural());
        assert!(AstError::new(ErrorKind::MalformedTemplate, "").is_structural());
        assert!(!AstError::new(ErrorKind::Serialization, "").is_structural());
        assert!(!AstError::new(ErrorKind::UnknownKind, "").is_structural());
    }
}
