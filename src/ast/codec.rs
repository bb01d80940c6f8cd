//! JSON encoding of whole programs
//!
//! The program travels inside a small envelope carrying [`AST_VERSION`], so
//! tooling can refuse dumps produced by an incompatible tree layout instead
//! of misreading them.

use super::Program;
use crate::debug_println;
use crate::error::{AstError, ErrorKind, Result};
use crate::span::LineIndex;
use crate::validate::Validator;
use serde::{Deserialize, Serialize};

/// Increment when a change to the node model alters the encoded shape.
pub const AST_VERSION: u32 = 2;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EnvelopeRef<'a> {
    ast_version: u32,
    program: &'a Program,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    ast_version: u32,
    program: Program,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VersionHeader {
    ast_version: u32,
}

pub fn encode(program: &Program) -> Result<String> {
    let envelope = EnvelopeRef {
        ast_version: AST_VERSION,
        program,
    };
    Ok(serde_json::to_string(&envelope)?)
}

pub fn encode_pretty(program: &Program) -> Result<String> {
    let envelope = EnvelopeRef {
        ast_version: AST_VERSION,
        program,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Decode a program, checking the envelope version before the body
pub fn decode(json: &str) -> Result<Program> {
    let header: VersionHeader = serde_json::from_str(json)?;
    if header.ast_version != AST_VERSION {
        debug_println!(
            "[codec] rejecting AST version {} (expected {})",
            header.ast_version,
            AST_VERSION
        );
        return Err(AstError::new(
            ErrorKind::UnsupportedVersion,
            format!(
                "encoded with AST version {}, this build reads version {}",
                header.ast_version, AST_VERSION
            ),
        ));
    }

    let envelope: Envelope = serde_json::from_str(json)?;
    debug_println!(
        "[codec] decoded {} top-level statements",
        envelope.program.body.len()
    );
    Ok(envelope.program)
}

/// Decode and then run the structural validator over the result
pub fn decode_checked(json: &str, source: Option<&LineIndex<'_>>) -> Result<Program> {
    let program = decode(json)?;
    let validator = match source {
        Some(index) => Validator::new().with_source(index),
        None => Validator::new(),
    };
    validator.validate(&program)?;
    Ok(program)
}
