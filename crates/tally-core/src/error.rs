//! Error types for archiving, unpacking and text acquisition.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that abort an archive run.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source path exists but is not a directory.
    #[error("Source path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

impl ArchiveError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Errors raised while acquiring the text to analyze.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The input file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Standard input could not be read to the end.
    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    /// The HTTP request failed before a response arrived.
    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// The server answered with a non-success status.
    #[error("Fetching {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The downloaded body could not be written to or read from the spool file.
    #[error("Failed to spool download: {0}")]
    Spool(#[source] std::io::Error),
}

/// Errors that abort an unpack run.
#[derive(Debug, Error)]
pub enum UnpackError {
    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The archive is not a readable ZIP file.
    #[error("Invalid ZIP archive {path}: {message}")]
    Zip { path: PathBuf, message: String },
}

impl UnpackError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Kind of archive warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// No source file matched the requested range.
    NoMatches,
    /// File name looked like a candidate but its id does not fit in a u64.
    UnparseableId,
    /// Copying a selected file failed.
    CopyFailed,
    /// A directory entry could not be read.
    ReadError,
}

/// Non-fatal warning encountered during an archive run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveWarning {
    /// Path where the warning occurred.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl ArchiveWarning {
    /// Create a new archive warning.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// Create a warning for a run that matched nothing.
    pub fn no_matches(source_dir: impl Into<PathBuf>, lower: u64, upper: u64) -> Self {
        let path = source_dir.into();
        Self {
            message: format!("No files with ids in [{lower}, {upper}] in {}", path.display()),
            path,
            kind: WarningKind::NoMatches,
        }
    }

    /// Create a warning for a file whose numeric suffix cannot be parsed.
    pub fn unparseable_id(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            message: format!("Numeric id out of range: {}", path.display()),
            path,
            kind: WarningKind::UnparseableId,
        }
    }

    /// Create a copy failure warning.
    pub fn copy_failed(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        Self {
            path: path.into(),
            message: format!("Copy failed: {error}"),
            kind: WarningKind::CopyFailed,
        }
    }
}
