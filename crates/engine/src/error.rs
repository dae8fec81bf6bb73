// crates/engine/src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Root error type for the comment stripping engine.
///
/// Callers that batch over many files match on the variants to decide
/// between skip-and-continue and abort: a `MalformedComment` fails one file,
/// `Config`/`Validation`/`Argument` are surfaced before any file is touched.
#[derive(Debug, Error)]
pub enum RipperError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Configuration file error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Malformed comment: {0}")]
    MalformedComment(#[from] MalformedCommentError),

    #[error("Argument error: {0}")]
    Argument(#[from] ArgumentError),

    #[error("Failed to read '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
}

pub type Result<T> = std::result::Result<T, RipperError>;

/// A language spec violates its internal invariants, or a requested
/// language is absent from the configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("language name must not be empty")]
    EmptyName,

    #[error("language '{language}' has an empty comment marker")]
    EmptyMarker { language: String },

    #[error("language '{language}' must set both or neither of multi-line start/end")]
    MultiLineMismatch { language: String },

    #[error(
        "language '{language}' has {positions} column constraints for {markers} single-line markers"
    )]
    PositionCount {
        language: String,
        positions: usize,
        markers: usize,
    },

    #[error("language '{language}' has a column constraint below 1")]
    InvalidColumn { language: String },

    #[error("'{0}' is not a valid language")]
    UnknownLanguage(String),
}

/// Configuration data failed schema validation. `path` points into the
/// offending structure, e.g. `languages[2].position[0].column`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{path}: {reason}")]
pub struct ValidationError {
    pub path: String,
    pub reason: String,
}

/// A block-comment end marker was seen with no corresponding open start.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("block comment end with no open block on line {line}: '{text}'")]
pub struct MalformedCommentError {
    /// 1-based line number within the file being stripped.
    pub line: usize,
    pub text: String,
}

/// A supplied path does not exist or is not the expected kind of entry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("'{0}' is not a valid path")]
    NotFound(PathBuf),

    #[error("'{0}' is not a directory")]
    NotADirectory(PathBuf),

    #[error("'{0}' is not a file")]
    NotAFile(PathBuf),
}
