//! Error types for character sheet resolution.

use std::path::PathBuf;

/// Errors that can occur while reading a character record or rendering a sheet.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    /// The record has no `class` entry.
    #[error("no 'class' value found in character record")]
    MissingClass,

    /// A field needed by a formula is absent from the record.
    #[error("missing field '{0}'")]
    MissingField(String),

    /// A field needed by a formula is not a whole number.
    #[error("field '{field}' is not numeric: '{value}'")]
    NotNumeric {
        /// The field name.
        field: String,
        /// The offending value.
        value: String,
    },

    /// A non-blank record line has no `=` separator.
    #[error("line {line}: expected 'key = value', found '{content}'")]
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// The line as written.
        content: String,
    },

    /// The class has no stat priority or hit die.
    #[error("unknown class: {0}")]
    UnknownClass(String),

    /// A numeric field is larger than hit point rolling supports.
    #[error("field '{field}' is out of range: {value} (at most {max})")]
    OutOfRange {
        /// The field name.
        field: String,
        /// The offending value.
        value: i32,
        /// Largest accepted value.
        max: i32,
    },

    /// A placeholder pattern failed to compile.
    #[error("invalid placeholder pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Reading or writing a file failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Convenience result type for sheet operations.
pub type SheetResult<T> = Result<T, SheetError>;
