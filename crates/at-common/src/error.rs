//! Error types for armtune.

use thiserror::Error;

/// Result type alias for armtune operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for armtune.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    // Policy errors (20-29)
    #[error("feedback for unknown arm index {index} (arm count {arm_count})")]
    InvalidArm { index: usize, arm_count: usize },

    #[error("all {arm_count} arms excluded; no arm left to play")]
    DegenerateElimination { arm_count: usize },

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    /// Used for detailed error reporting in JSON output.
    pub fn code(&self) -> u32 {
        match self {
            Error::InvalidConfig(_) => 10,
            Error::InvalidArm { .. } => 20,
            Error::DegenerateElimination { .. } => 21,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }
}
