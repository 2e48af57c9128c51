//! Error types for the fibonacci CLI
//!
//! Arithmetic never fails here: overflow wraps. Errors only come from
//! reading configuration and writing output.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the fibonacci CLI
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },
}

impl Error {
    /// Create a file read error for `path`
    pub fn file_read(path: &std::path::Path, error: &io::Error) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }

    /// True when output was cut off by the reader closing the pipe
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
