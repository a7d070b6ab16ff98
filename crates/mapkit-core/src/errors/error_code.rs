//! Stable error codes shared by every mapkit error enum.

/// Maps an error to a stable, machine-readable code.
/// Every error enum implements this so callers can branch on the code
/// without matching on variants.
pub trait MapkitErrorCode {
    /// Returns the error code string (e.g., "MALFORMED_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const MALFORMED_INPUT: &str = "MALFORMED_INPUT";
pub const UNREPRESENTABLE: &str = "UNREPRESENTABLE";
pub const CLONE_ERROR: &str = "CLONE_ERROR";
pub const RECORD_ERROR: &str = "RECORD_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
