//! Error types for the Tallytable workspace.
//!
//! Uses `thiserror` for ergonomic error definition. The classifier and
//! ledger engine are total over malformed input (bad entries degrade to
//! no-ops, never errors); only the runtime surfaces produce these.

use std::fmt;

use thiserror::Error;

/// Result alias for Tallytable operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Tallytable operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a transcript parse error.
    #[must_use]
    pub fn transcript(message: impl Into<String>, column: Option<usize>) -> Self {
        Self::new(ErrorKind::Transcript(TranscriptError {
            message: message.into(),
            column,
        }))
    }

    /// Creates a snapshot serialization error.
    #[must_use]
    pub fn snapshot(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Snapshot(message.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Transcript line could not be parsed.
    #[error("transcript error: {0}")]
    Transcript(TranscriptError),

    /// Snapshot could not be serialized or deserialized.
    #[error("snapshot error: {0}")]
    Snapshot(String),

    /// Underlying I/O failure.
    #[error("io error: {0}")]
    Io(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Details of a transcript parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptError {
    /// Description of the problem.
    pub message: String,
    /// Byte column where the problem was detected, when known.
    pub column: Option<usize>,
}

impl fmt::Display for TranscriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(column) = self.column {
            write!(f, " (column {column})")?;
        }
        Ok(())
    }
}
