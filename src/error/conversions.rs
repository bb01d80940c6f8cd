//! Conversions from foreign error types into AstError

use super::{AstError, ErrorKind};

impl From<serde_json::Error> for AstError {
    fn from(err: serde_json::Error) -> Self {
        let note = format!("at line {}, column {} of the encoded tree", err.line(), err.column());
        AstError::new(ErrorKind::Serialization, err.to_string()).with_note(note)
    }
}

/// Helper trait for converting String messages to AstError
pub trait IntoAstError {
    fn into_unknown_kind(self) -> AstError;
    fn into_unknown_operator(self) -> AstError;
}

impl IntoAstError for String {
    fn into_unknown_kind(self) -> AstError {
        AstError::new(ErrorKind::UnknownKind, self)
    }

    fn into_unknown_operator(self) -> AstError {
        AstError::new(ErrorKind::UnknownOperator, self)
    }
}
