//! Error and diagnostic types for codestatslib

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a scan before it starts.
///
/// Everything that goes wrong *during* a traversal is recovered and reported
/// as a [`Diagnostic`] instead.
#[derive(Error, Debug)]
pub enum CodestatsError {
    /// Malformed or self-contradictory language configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Failed to read a configuration file
    #[error("failed to read config file '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Scan root is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What kind of recoverable condition a [`Diagnostic`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A boundary's ignore file could not be read or parsed
    IgnoreLoad,
    /// A file or directory could not be read mid-walk
    FileRead,
}

/// A condition recovered during traversal.
///
/// Diagnostics never abort a scan; they accumulate in the
/// [`ScanReport`](crate::walker::ScanReport) for the caller to inspect.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// Path the condition was encountered at
    pub path: PathBuf,
    /// Kind of condition
    pub kind: DiagnosticKind,
    /// Human-readable description of the underlying error
    pub message: String,
}

impl Diagnostic {
    /// Create a diagnostic for a path.
    pub fn new(path: impl Into<PathBuf>, kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}
