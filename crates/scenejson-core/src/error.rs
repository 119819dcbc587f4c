//! Error types for scene conversion operations.

use std::io;
use thiserror::Error;

/// Result type for scene conversion operations
pub type Result<T> = std::result::Result<T, SceneError>;

/// Scene conversion errors
#[derive(Debug, Error)]
pub enum SceneError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed geometry or material line
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number in the source file
        line: usize,
        /// What went wrong on that line
        message: String,
    },

    /// Face references a vertex position that was never declared
    #[error("position index {index} out of range ({count} positions declared)")]
    PositionOutOfRange {
        /// 0-based position index referenced by the face
        index: usize,
        /// Number of positions declared in the file
        count: usize,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SceneError {
    /// Build a parse error for the given 1-based line number.
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
