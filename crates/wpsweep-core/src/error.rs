//! Error types for wpsweep

use thiserror::Error;

/// Result type alias using SweepError
pub type Result<T> = std::result::Result<T, SweepError>;

/// Error type alias for convenience
pub type Error = SweepError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOTHING_DELETED: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for wpsweep
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No entries deleted.")]
    NothingDeleted,
}

impl SweepError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NothingDeleted => exit_codes::NOTHING_DELETED,
            Self::InvalidInput(_) => exit_codes::INVALID_INPUT,
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}
