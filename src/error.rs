//! Error types for update checking.
//!
//! This module defines [`UpdaterError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `UpdaterError` for failures the caller may want to tell apart
//! - Use `anyhow::Error` (via `UpdaterError::Other`) for contextual IO errors
//! - [`ReleaseUpdateChecker::get_latest_release`] collapses every failure into
//!   `None`; the error kinds only surface through the fallible inner calls
//!
//! [`ReleaseUpdateChecker::get_latest_release`]: crate::updates::ReleaseUpdateChecker::get_latest_release

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for update checking.
#[derive(Debug, Error)]
pub enum UpdaterError {
    /// The release API could not be reached (network failure or timeout).
    #[error("Failed to reach {url}: {message}")]
    Transport { url: String, message: String },

    /// The release API answered with something other than 200 OK.
    #[error("Unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    /// The response body is not a release document.
    #[error("Malformed release response: {message}")]
    MalformedResponse { message: String },

    /// The cache store could not be read or written.
    #[error("Cache error: {message}")]
    Cache { message: String },

    /// Failed to parse a configuration or settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for UpdaterError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse {
            message: err.to_string(),
        }
    }
}

/// Result type alias for update operations.
pub type Result<T> = std::result::Result<T, UpdaterError>;
