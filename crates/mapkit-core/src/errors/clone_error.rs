//! Concurrent clone errors.

use super::error_code::{self, MapkitErrorCode};

/// Errors that can occur during a concurrent deep clone.
///
/// The sequential clone has no error path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CloneError {
    #[error("Value nesting exceeds the depth limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    #[error("Clone task panicked: {message}")]
    TaskPanicked { message: String },

    #[error("Failed to build clone thread pool: {message}")]
    ThreadPool { message: String },
}

impl MapkitErrorCode for CloneError {
    fn error_code(&self) -> &'static str {
        error_code::CLONE_ERROR
    }
}
