use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] attachlist_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Failed to read attachments from {path}: {source}")]
    ReadInput { path: String, source: io::Error },
    #[error("Invalid attachment document: {0}")]
    InvalidInput(String),
    #[error("No config file given. Pass --config or set ATTACHLIST_CONFIG.")]
    ConfigNotSpecified,
}
