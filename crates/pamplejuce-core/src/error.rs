//! Error types for version record handling.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading the packaged version record.
///
/// A version mismatch is not an error; it is reported through
/// [`VersionCheck::Mismatch`](crate::version::VersionCheck::Mismatch).
#[derive(Debug, Error)]
pub enum VersionError {
    /// The version record could not be opened or read.
    #[error("version record '{path}' is unavailable: {source}")]
    ResourceUnavailable {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for version record operations.
pub type VersionResult<T> = Result<T, VersionError>;
