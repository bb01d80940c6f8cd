//! Error assertion utilities for more precise error testing

use wencode_ast::{AstError, ErrorKind, Span};

/// Assert that an error has a specific kind
pub fn assert_error_kind(error: &AstError, expected_kind: ErrorKind) {
    if error.kind != expected_kind {
        panic!(
            "Expected error kind {:?}, but got {:?} ({})",
            expected_kind, error.kind, error
        );
    }
}

/// Assert that an error message contains a substring
pub fn assert_error_contains(error: &AstError, substring: &str) {
    if !error.message.contains(substring) {
        panic!(
            "Expected error message to contain '{}', but got: '{}'",
            substring, error.message
        );
    }
}

/// Assert that an error points at a specific span
pub fn assert_error_span(error: &AstError, expected: Span) {
    match &error.context.span {
        Some(span) if *span == expected => {}
        Some(span) => panic!("Expected error at {}, but got {}", expected, span),
        None => panic!("Expected error to have span {}, but it has none", expected),
    }
}

/// Assert that a result failed with the given kind, returning the error
pub fn expect_error<T: std::fmt::Debug>(
    result: Result<T, AstError>,
    expected_kind: ErrorKind,
) -> AstError {
    match result {
        Ok(value) => panic!("Expected {:?} error, but got {:?}", expected_kind, value),
        Err(error) => {
            assert_error_kind(&error, expected_kind);
            error
        }
    }
}
