//! Error types for placeholder operations.

use thiserror::Error;

/// Result type alias for placeholder operations.
pub type PlaceholderResult<T> = Result<T, PlaceholderError>;

/// Errors that can occur during placeholder operations.
///
/// Capture misuse is a contract violation and always surfaces as a hard
/// error; lookup misses on containers are plain `Option` returns instead.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlaceholderError {
    #[error("A capture session is already active on this container")]
    CaptureAlreadyActive,

    #[error("No capture session is active on this container")]
    NoActiveCapture,
}
