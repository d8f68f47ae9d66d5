// ============================================================================
// medialist-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types for MediaList
//
// This module defines the error types used throughout the medialist-core
// library. It uses the thiserror crate to derive the std::error::Error trait
// implementation and provides a convenient Result type alias.
//
// KEY COMPONENTS:
// - CoreError: Enum of all possible error types
// - CoreResult: Type alias for Result<T, CoreError>

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the medialist-core library.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A file matched the episode glob but its season/episode token could
    /// not be turned into numbers.
    #[error("Invalid episode filename '{name}': {reason}")]
    InvalidEpisodeName { name: String, reason: String },

    /// A directory matched `Season *` but carries no usable season number.
    #[error("Invalid season folder name '{name}'")]
    InvalidSeasonFolderName { name: String },

    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for medialist-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Returns true for errors caused by a malformed season or episode name.
    #[must_use]
    pub fn is_name_error(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidEpisodeName { .. } | CoreError::InvalidSeasonFolderName { .. }
        )
    }
}
