//! Error types for the lexiguess library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`LexiguessError`] enum. The analysis core itself never fails: any string,
//! including the empty string, is valid input. Errors only arise at the outer
//! surfaces (file I/O, JSON output, invalid game operations).

use std::io;

use thiserror::Error;

/// The main error type for lexiguess operations.
#[derive(Error, Debug)]
pub enum LexiguessError {
    /// I/O errors (reading text files, stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Game-related errors (bad reveals, finished sessions, etc.)
    #[error("Game error: {0}")]
    Game(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexiguessError.
pub type Result<T> = std::result::Result<T, LexiguessError>;

impl LexiguessError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexiguessError::Analysis(msg.into())
    }

    /// Create a new game error.
    pub fn game<S: Into<String>>(msg: S) -> Self {
        LexiguessError::Game(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        LexiguessError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexiguessError::Other(msg.into())
    }
}
