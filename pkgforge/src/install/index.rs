//! Reading the package index file.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::{InstallError, InstallResult};

/// Read a package index: one package directory path per line.
///
/// Empty lines are skipped. Paths are returned exactly as written; relative
/// paths resolve against the process working directory when used.
pub fn read_index(path: &Path) -> InstallResult<Vec<PathBuf>> {
    let contents = fs::read_to_string(path).map_err(|source| InstallError::ReadIndexFailed {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_index(&contents))
}

/// Parse index file contents.
pub fn parse_index(contents: &str) -> Vec<PathBuf> {
    contents
        .lines()
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}
