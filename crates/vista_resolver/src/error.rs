//! Error types for template resolution.
//!
//! Only contract violations surface here; ordinary lookup misses are
//! reported through [`crate::Resolution::NotFound`] so that callers can
//! chain resolvers without error handling.

use thiserror::Error;

/// Result type alias for resolver operations.
pub type ResolverResult<T> = Result<T, ResolverError>;

/// Errors that can occur during resolver operations.
#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("Parent-directory traversal detected in template name: {0}")]
    TraversalDetected(String),

    #[error("Invalid resolver configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
