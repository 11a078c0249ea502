//! Error types for the install simulator.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for install simulation.
pub type InstallResult<T> = Result<T, InstallError>;

/// Errors that can occur while simulating an install run.
#[derive(Debug, Error)]
pub enum InstallError {
    /// Failed to read the package index file.
    #[error("failed to read package index {}: {source}", path.display())]
    ReadIndexFailed { path: PathBuf, source: io::Error },

    /// Failed to read a package file or directory.
    #[error("failed to read {}: {source}", path.display())]
    ReadFailed { path: PathBuf, source: io::Error },

    /// Failed to write an installed file or the install database.
    #[error("failed to write {}: {source}", path.display())]
    WriteFailed { path: PathBuf, source: io::Error },

    /// Failed to create an output directory.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDirFailed { path: PathBuf, source: io::Error },

    /// The worker thread pool could not be built.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),
}
