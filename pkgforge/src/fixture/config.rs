//! Configuration for the fixture generator.

use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Default number of packages to generate.
pub const DEFAULT_PACKAGE_COUNT: u32 = 100;

/// Default number of payload files per package.
pub const DEFAULT_FILES_PER_PACKAGE: u32 = 20;

/// Smallest payload file, in bytes.
pub const MIN_PAYLOAD_SIZE: usize = 1024;

/// Largest payload file, in bytes.
pub const MAX_PAYLOAD_SIZE: usize = 5120;

/// Inclusive range every payload size is drawn from.
pub const PAYLOAD_SIZE_RANGE: RangeInclusive<usize> = MIN_PAYLOAD_SIZE..=MAX_PAYLOAD_SIZE;

/// Configuration for the fixture generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory the fixture tree is written under.
    ///
    /// The CLI uses the working directory. Paths in the index file are
    /// relative to this directory.
    pub base_dir: PathBuf,

    /// Number of packages to generate. Zero writes an empty index.
    pub package_count: u32,

    /// Number of payload files in each package.
    pub files_per_package: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            package_count: DEFAULT_PACKAGE_COUNT,
            files_per_package: DEFAULT_FILES_PER_PACKAGE,
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration writing under the given base directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Default::default()
        }
    }

    /// Set the number of packages.
    pub fn with_package_count(mut self, count: u32) -> Self {
        self.package_count = count;
        self
    }

    /// Set the number of payload files per package.
    pub fn with_files_per_package(mut self, count: u32) -> Self {
        self.files_per_package = count;
        self
    }

    /// Total number of payload files a run will write.
    pub fn total_files(&self) -> u64 {
        u64::from(self.package_count) * u64::from(self.files_per_package)
    }
}
