//! Error types for attachlist-core

use thiserror::Error;

/// Result type alias using attachlist-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading resolver configuration.
///
/// Resolution itself never fails; see [`crate::plugin::MatchError`] for the
/// per-predicate failures that are isolated during selection.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration rejected by validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid file name pattern in a plugin rule
    #[error("Invalid name pattern: {0}")]
    Pattern(#[from] regex::Error),
}
