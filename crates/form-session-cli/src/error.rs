//! Error types for script replay.

use std::path::PathBuf;

/// Errors that can occur while loading or replaying a script.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    /// IO error (reading the script or writing output).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Script file could not be read.
    #[error("Failed to read script '{path}': {source}")]
    ReadScript {
        /// Path to the script file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// A script line is not a valid event.
    #[error("Invalid event on line {line}: {source}")]
    InvalidEvent {
        /// One-based line number.
        line: usize,
        /// Parse error.
        source: serde_json::Error,
    },

    /// An event was rejected by the form.
    #[error("Event on line {line} failed: {source}")]
    EventFailed {
        /// One-based line number.
        line: usize,
        /// Form error.
        source: form_session::FormError,
    },

    /// Form setup or output error.
    #[error("Form error: {0}")]
    Form(#[from] form_session::FormError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for replay operations.
pub type Result<T> = std::result::Result<T, ReplayError>;
