//! Error types for fixture generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for fixture generation.
pub type FixtureResult<T> = Result<T, FixtureError>;

/// Errors that can occur while writing the fixture tree.
///
/// Every variant is tagged with the path being written. Generation stops
/// at the first error and leaves whatever was already written in place.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Failed to create a directory.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDirFailed { path: PathBuf, source: io::Error },

    /// Failed to create or write a file.
    #[error("failed to write {}: {source}", path.display())]
    WriteFailed { path: PathBuf, source: io::Error },

    /// Failed to encode a manifest.
    #[error("failed to serialize manifest {}: {source}", path.display())]
    SerializeFailed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl FixtureError {
    /// Path the failing operation was working on.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::CreateDirFailed { path, .. }
            | Self::WriteFailed { path, .. }
            | Self::SerializeFailed { path, .. } => path,
        }
    }
}
