//! Error types for locshot
//!
//! Uses `thiserror` for library errors; `anyhow` stays at the binary edge.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for locshot operations
pub type LocshotResult<T> = Result<T, LocshotError>;

/// Main error type for locshot operations
#[derive(Error, Debug)]
pub enum LocshotError {
    /// A filename does not conform to the capture protocol.
    ///
    /// Recoverable: directory scans skip (and count) these files instead of
    /// aborting the run.
    #[error("malformed screenshot filename '{name}': {reason}")]
    MalformedFilename { name: String, reason: String },

    /// A locale screenshot has no baseline counterpart to compare against.
    ///
    /// Fatal: a missing baseline must never be counted as "identical" or
    /// "different".
    #[error("missing baseline screenshot {baseline} for {locale_file}")]
    MissingBaseline {
        locale_file: PathBuf,
        baseline: PathBuf,
    },

    /// The comparison oracle itself failed (unreadable or undecodable image).
    #[error("comparison failed for {left} vs {right}: {message}")]
    ComparisonFailure {
        left: PathBuf,
        right: PathBuf,
        message: String,
    },

    /// A filesystem operation failed.
    #[error("{op} failed for {path}: {source}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Config file exists but could not be parsed
    #[error("invalid config {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },
}

impl LocshotError {
    /// Build an [`LocshotError::Io`] tagging the failed operation and path.
    pub fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// True for errors a directory scan recovers from by skipping the file.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::MalformedFilename { .. })
    }
}
