//! Error types for wordlist processing
//!
//! All fallible operations return `Result<T, Error>`.
//! Every variant that touches the filesystem carries the offending path.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Wordlist error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Input file does not exist
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Input is not a flat JSON object of word to number
    #[error("parse error in {}: {message}", path.display())]
    ParseError { path: PathBuf, message: String },

    /// Output could not be written or persisted
    #[error("cannot write {}: {message}", path.display())]
    WriteError { path: PathBuf, message: String },

    /// Read failure other than a missing file
    #[error("cannot read {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    /// Wordlist or report could not be encoded as JSON
    #[error("cannot serialize {what}: {message}")]
    SerializeError { what: String, message: String },

    /// Invalid stage parameters
    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

impl Error {
    pub(crate) fn read(path: &Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::Io {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
        }
    }

    pub(crate) fn parse(path: &Path, message: impl ToString) -> Self {
        Error::ParseError {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }

    pub(crate) fn write(path: &Path, message: impl ToString) -> Self {
        Error::WriteError {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }
}

/// Result type alias for wordlist operations
pub type Result<T> = std::result::Result<T, Error>;
