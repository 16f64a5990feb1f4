//! Error types for logger operations

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while opening, rotating or writing the log file
#[derive(Error, Debug)]
pub enum LogError {
    /// The log file could not be created or opened for append
    #[error("open file failed: {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Filesystem metadata could not be read
    #[error("stat failed: {0}")]
    Stat(#[source] std::io::Error),

    /// The log file could not be removed during rotation
    #[error("remove file failed: {path}: {source}")]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Appending or syncing the formatted line failed
    #[error("write failed: {0}")]
    Write(#[source] std::io::Error),

    /// No file handle is open (never opened, closed, or a rotation failed)
    #[error("log file is not open")]
    NotOpen,

    /// Strict level parsing rejected the name
    #[error("unknown log level: {0}")]
    UnknownLevel(String),
}

impl LogError {
    /// Create an open error for the given path
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Create a delete error for the given path
    pub fn delete(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Delete {
            path: path.into(),
            source,
        }
    }
}

pub type LogResult<T> = Result<T, LogError>;
