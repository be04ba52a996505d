//! Error types for the name generator.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for name generation operations.
pub type NameResult<T> = Result<T, NameError>;

/// Errors that can occur while building a transition matrix or sampling names.
#[derive(Debug, Error)]
pub enum NameError {
    /// The word list had no entries.
    #[error("word list is empty")]
    EmptyWordList,

    /// The requested length range cannot produce a word.
    #[error("invalid length range {min}..={max}")]
    InvalidLengthRange {
        /// Requested minimum length.
        min: usize,
        /// Requested maximum length.
        max: usize,
    },

    /// No character in the matrix has an outgoing transition.
    #[error("no character in the matrix can start a word")]
    NoStartCharacter,

    /// Every walk dead-ended before reaching the target length.
    #[error("no path of length {length} found after {attempts} attempts")]
    NoViablePath {
        /// Target length of the last attempted walk.
        length: usize,
        /// Number of walks attempted.
        attempts: usize,
    },

    /// A review decision was made with no word on the table.
    #[error("no word is awaiting a decision")]
    NoPendingWord,

    /// The review session was already reset.
    #[error("review session has finished")]
    SessionFinished,

    /// A reviewer answer could not be understood.
    #[error("unrecognized answer: {0}")]
    InvalidDecision(String),

    /// Reading or writing a word list failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The matrix could not be serialized.
    #[error("cannot serialize matrix: {0}")]
    Serialize(#[from] serde_json::Error),
}
