//! Error handling for mapkit.
//! One error enum per subsystem, `thiserror` only.

pub mod clone_error;
pub mod codec_error;
pub mod config_error;
pub mod error_code;
pub mod record_error;

pub use clone_error::CloneError;
pub use codec_error::CodecError;
pub use config_error::ConfigError;
pub use error_code::MapkitErrorCode;
pub use record_error::RecordError;
