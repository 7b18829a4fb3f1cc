//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading input trace files
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read trace file {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while collapsing thread ids
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CollapseError {
    #[error("Event {index} is not a JSON object")]
    NotAnObject { index: usize },

    #[error("Event {index} has no string \"name\" field")]
    MissingName { index: usize },
}

/// Errors that can occur during output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
