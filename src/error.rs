// src/error.rs

//! Error types for bundled provides generation

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating bundled provides
#[derive(Debug, Error)]
pub enum Error {
    /// An input file is missing or could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A require block entry carries a module path but no version
    #[error("Malformed require entry on line {line}: expected '<module> <version>', found '{content}'")]
    MalformedRequire { line: usize, content: String },

    /// The config file could not be read or deserialized
    #[error("Invalid config file {}: {message}", .path.display())]
    ConfigError { path: PathBuf, message: String },

    /// Writing declarations to the output failed
    #[error("Failed to write output: {0}")]
    WriteError(#[from] std::io::Error),
}

impl Error {
    /// Wrap an I/O error raised while reading `path`
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }
}

/// Result type for bundled provides operations
pub type Result<T> = std::result::Result<T, Error>;
