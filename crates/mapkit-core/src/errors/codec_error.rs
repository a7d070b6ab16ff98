//! JSON codec errors.

use super::error_code::{self, MapkitErrorCode};

/// Errors raised at the JSON boundary.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("Malformed JSON at line {line}, column {column}: {message}")]
    MalformedInput {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Expected a JSON object at the top level, found {found}")]
    NotAnObject { found: &'static str },

    #[error("Value cannot be represented as JSON: {message}")]
    Unrepresentable { message: String },
}

impl MapkitErrorCode for CodecError {
    fn error_code(&self) -> &'static str {
        match self {
            CodecError::MalformedInput { .. } | CodecError::NotAnObject { .. } => {
                error_code::MALFORMED_INPUT
            }
            CodecError::Unrepresentable { .. } => error_code::UNREPRESENTABLE,
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::MalformedInput {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}
