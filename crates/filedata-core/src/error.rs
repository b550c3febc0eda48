//! Error types for filedata-core

use std::path::PathBuf;

/// Result type for filedata-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in filedata-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A line write in a reconciliation plan failed
    #[error("Unable to write line {index}: {source}")]
    Write {
        index: usize,
        #[source]
        source: filedata_fs::Error,
    },

    /// The trailing trim in a reconciliation plan failed
    #[error("Unable to trim file to {length} lines: {source}")]
    Trim {
        length: usize,
        #[source]
        source: filedata_fs::Error,
    },

    /// Refreshing a resource from disk failed
    #[error("Unable to read file: {source}")]
    Read {
        #[source]
        source: filedata_fs::Error,
    },

    /// Removing a resource's file failed
    #[error("Unable to delete file: {source}")]
    Delete {
        #[source]
        source: filedata_fs::Error,
    },

    #[error("Invalid file name '{name}': must contain only lowercase alphanumeric characters")]
    InvalidFileName { name: String },

    #[error("File '{name}' declares {count} lines, at least {min} are required")]
    TooFewLines {
        name: String,
        count: usize,
        min: usize,
    },

    #[error("Line {index} of '{name}' contains a line break")]
    InvalidLine { name: String, index: usize },

    /// No state is recorded for the named resource
    #[error("Unknown resource: {name}")]
    UnknownResource { name: String },

    #[error("Failed to parse config at {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Ledger error at {path}: {message}")]
    Ledger { path: PathBuf, message: String },

    /// Filesystem error from filedata-fs
    #[error(transparent)]
    Fs(#[from] filedata_fs::Error),
}

impl Error {
    /// The underlying line store error, if any.
    pub fn fs_source(&self) -> Option<&filedata_fs::Error> {
        match self {
            Self::Write { source, .. }
            | Self::Trim { source, .. }
            | Self::Read { source }
            | Self::Delete { source } => Some(source),
            Self::Fs(source) => Some(source),
            _ => None,
        }
    }
}
