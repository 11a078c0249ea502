//! Centralized fixture naming conventions.
//!
//! This module is the single source of truth for every name the generator
//! writes to disk:
//! - Package directory names (e.g., `pkg001`)
//! - Payload filenames (e.g., `f1.bin`)
//! - The fixed layout names (`pkgs/`, `packages.txt`, `manifest.json`, `files/`)
//!
//! The install simulator reads the same layout, so both sides go through
//! these functions rather than constructing names directly.

use std::path::PathBuf;

/// Directory that contains every generated package.
pub const ROOT_DIR: &str = "pkgs";

/// Index file listing the generated package directories, one per line.
pub const INDEX_FILE: &str = "packages.txt";

/// Manifest filename inside each package directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Subdirectory of each package that holds the payload files.
pub const FILES_DIR: &str = "files";

const PACKAGE_PREFIX: &str = "pkg";

/// Minimum number of digits in a package index.
const PACKAGE_INDEX_WIDTH: usize = 3;

/// Generate the directory name for the package with the given 1-based index.
///
/// Indices are zero-padded to three digits. Wider indices keep all of their
/// digits.
///
/// # Examples
///
/// ```
/// use pkgforge::fixture::package_name;
///
/// assert_eq!(package_name(1), "pkg001");
/// assert_eq!(package_name(100), "pkg100");
/// assert_eq!(package_name(1000), "pkg1000");
/// ```
pub fn package_name(index: u32) -> String {
    format!(
        "{}{:0width$}",
        PACKAGE_PREFIX,
        index,
        width = PACKAGE_INDEX_WIDTH
    )
}

/// Recover the package index from a package directory name.
///
/// Returns `None` for anything [`package_name`] would not produce.
///
/// # Examples
///
/// ```
/// use pkgforge::fixture::parse_package_index;
///
/// assert_eq!(parse_package_index("pkg007"), Some(7));
/// assert_eq!(parse_package_index("pkg1234"), Some(1234));
/// assert_eq!(parse_package_index("pkg7"), None);
/// ```
pub fn parse_package_index(name: &str) -> Option<u32> {
    let digits = name.strip_prefix(PACKAGE_PREFIX)?;
    if digits.len() < PACKAGE_INDEX_WIDTH || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Only the padded form is canonical: "pkg0100" is not a name we generate.
    if digits.len() > PACKAGE_INDEX_WIDTH && digits.starts_with('0') {
        return None;
    }
    digits.parse().ok()
}

/// Generate the filename for the payload file with the given 1-based index.
///
/// ```
/// use pkgforge::fixture::payload_filename;
///
/// assert_eq!(payload_filename(1), "f1.bin");
/// assert_eq!(payload_filename(20), "f20.bin");
/// ```
pub fn payload_filename(index: u32) -> String {
    format!("f{}.bin", index)
}

/// Package directory path relative to the base directory (`pkgs/<name>`).
///
/// This is the exact form written to the index file.
pub fn package_relative_dir(name: &str) -> PathBuf {
    PathBuf::from(ROOT_DIR).join(name)
}
