//! Error types for showparse.
//!
//! This module defines the error types used throughout showparse, providing
//! rich error information for debugging and user feedback.

use crate::platform::Nos;
use thiserror::Error;

/// Result type alias for showparse operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for showparse.
#[derive(Error, Debug)]
pub enum Error {
    /// NOS identifier outside the supported set.
    #[error("Unsupported nos '{given}', expected one of: ios, iosxe, iosxr, nxos")]
    UnsupportedNos {
        /// The identifier that failed validation
        given: String,
    },

    /// Show command that cannot form a lookup key.
    #[error("Invalid show command: {0}")]
    InvalidCommand(String),

    /// No parser matched the command, or the matched parser failed.
    #[error("No parser found for command '{command}' for nos '{nos}': {message}")]
    ParserNotFound {
        /// The show command as the caller gave it
        command: String,
        /// The configured NOS
        nos: Nos,
        /// Detail from the underlying failure
        message: String,
        /// Source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A parser implementation rejected the output it was given.
    #[error("Parse failed: {0}")]
    Parse(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a new parser-not-found error.
    pub fn parser_not_found(
        command: impl Into<String>,
        nos: Nos,
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::ParserNotFound {
            command: command.into(),
            nos,
            message: message.into(),
            source,
        }
    }
}
