//! Error types for kinship.
//!
//! All errors in kinship are strongly typed using thiserror.
//! Query outcomes such as an unknown person are *not* errors; they are
//! reported as [`ResultMessage`](crate::message::ResultMessage) values.
//! The types here cover malformed input and infrastructure failures.

use thiserror::Error;

/// Errors that occur while parsing textual input (tokens and command lines).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown gender '{token}'")]
    UnknownGender {
        token: String,
    },

    #[error("Unknown relationship '{token}'")]
    UnknownRelationship {
        token: String,
    },

    #[error("Empty command line")]
    EmptyCommand,

    #[error("Unknown command '{verb}'")]
    UnknownCommand {
        verb: String,
    },

    #[error("Command '{verb}' expects {expected} arguments, got {actual}")]
    WrongArity {
        verb: String,
        expected: usize,
        actual: usize,
    },
}

/// Errors raised by the family store and the tree loader.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A lock guarding the tree was poisoned by a panicking writer.
    #[error("Storage backend error: {0}")]
    BackendError(String),

    /// The tree document could not be decoded.
    #[error("Failed to load family tree: {0}")]
    Load(#[from] serde_json::Error),

    /// The tree document could not be read.
    #[error("Failed to read family tree: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level error type for kinship.
#[derive(Debug, Error)]
pub enum KinError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Writing a result line to the output sink failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl KinError {
    /// Returns true if this is a parse error.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Returns true if this is a storage error.
    #[must_use]
    pub const fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    /// Returns true if this is an output error.
    #[must_use]
    pub const fn is_output(&self) -> bool {
        matches!(self, Self::Output(_))
    }
}

/// Result type alias for kinship operations.
pub type KinResult<T> = Result<T, KinError>;
