//! Record construction and access errors.

use super::error_code::{self, MapkitErrorCode};

/// Errors that can occur when building or updating a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("Record {record} declares field {field} more than once")]
    DuplicateField { record: String, field: String },

    #[error("Record {record} expects {expected} values, got {found}")]
    FieldCountMismatch {
        record: String,
        expected: usize,
        found: usize,
    },

    #[error("Record {record} has no field named {field}")]
    UnknownField { record: String, field: String },
}

impl MapkitErrorCode for RecordError {
    fn error_code(&self) -> &'static str {
        error_code::RECORD_ERROR
    }
}
