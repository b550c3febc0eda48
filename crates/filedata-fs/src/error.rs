//! Error types for filedata-fs

use std::path::PathBuf;

/// Result type for filedata-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in line store operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file does not exist (or vanished) for an operation that needs it.
    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File {path} has {available} lines, cannot trim to {requested}")]
    InsufficientLines {
        path: PathBuf,
        requested: usize,
        available: usize,
    },

    #[error("Line indices start at 1, got {index}")]
    InvalidIndex { index: usize },

    #[error("Line {index} contains a line break")]
    InvalidLine { index: usize },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    /// Wrap an I/O error, keeping file absence distinguishable from other failures.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// True when the error means the file is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
