//! Fixture tree generator.
//!
//! [`FixtureGenerator`] writes the whole fixture tree in one sequential pass:
//!
//! ```text
//! packages.txt                 pkgs/pkg001 ... one line per package
//! pkgs/
//!   pkg001/
//!     manifest.json            {"name":"pkg001","version":"1.0.0"}
//!     files/
//!       f1.bin                 random bytes, 1024..=5120 long
//!       f2.bin
//! ```
//!
//! The randomness source is a type parameter so tests can inject a seeded
//! generator; [`FixtureGenerator::new`] uses the thread-local RNG.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::{debug, info};

use super::config::{GeneratorConfig, PAYLOAD_SIZE_RANGE};
use super::error::{FixtureError, FixtureResult};
use super::manifest::Manifest;
use super::naming::{
    package_name, package_relative_dir, payload_filename, FILES_DIR, INDEX_FILE, MANIFEST_FILE,
    ROOT_DIR,
};

/// Progress callback invoked after each package is written.
///
/// # Arguments
///
/// * `packages_done` - Number of packages fully written so far
/// * `packages_total` - Number of packages the run will write
pub type GenerateProgressCallback = Box<dyn Fn(u32, u32) + Send + Sync>;

/// A package written by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPackage {
    /// 1-based package index.
    pub index: u32,

    /// Package name (`pkgNNN`).
    pub name: String,

    /// Package directory relative to the base directory, as listed in the index.
    pub relative_dir: PathBuf,

    /// Number of payload files written.
    pub file_count: u32,

    /// Sum of the payload file sizes, in bytes.
    pub payload_bytes: u64,
}

/// Summary of a completed generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Path of the index file that was written.
    pub index_path: PathBuf,

    /// Generated packages in creation order.
    pub packages: Vec<GeneratedPackage>,
}

impl GenerationReport {
    /// Number of packages written.
    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    /// Number of payload files written across all packages.
    pub fn total_files(&self) -> u64 {
        self.packages.iter().map(|p| u64::from(p.file_count)).sum()
    }

    /// Total payload bytes written across all packages.
    pub fn total_payload_bytes(&self) -> u64 {
        self.packages.iter().map(|p| p.payload_bytes).sum()
    }
}

/// Writes package fixtures to disk.
///
/// # Type Parameters
///
/// * `R` - Randomness source for payload sizes and contents
pub struct FixtureGenerator<R> {
    config: GeneratorConfig,
    rng: R,
    progress: Option<GenerateProgressCallback>,
}

impl FixtureGenerator<ThreadRng> {
    /// Create a generator backed by the thread-local RNG.
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_rng(config, rand::rng())
    }
}

impl<R: Rng> FixtureGenerator<R> {
    /// Create a generator with an explicit randomness source.
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            progress: None,
        }
    }

    /// Set a callback to be notified as packages complete.
    pub fn with_progress(mut self, callback: GenerateProgressCallback) -> Self {
        self.progress = Some(callback);
        self
    }

    /// The configuration this generator was created with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Write the complete fixture tree.
    ///
    /// Existing directories are reused and existing files are overwritten.
    /// The first I/O failure aborts the run; files written before it are
    /// left in place and the index keeps the lines already written.
    pub fn generate(&mut self) -> FixtureResult<GenerationReport> {
        let base_dir = self.config.base_dir.clone();
        let total = self.config.package_count;

        info!(
            base_dir = %base_dir.display(),
            packages = total,
            files_per_package = self.config.files_per_package,
            "Generating package fixtures"
        );

        let root = base_dir.join(ROOT_DIR);
        create_dir_all(&root)?;

        let index_path = base_dir.join(INDEX_FILE);
        let index_file = File::create(&index_path).map_err(|source| FixtureError::WriteFailed {
            path: index_path.clone(),
            source,
        })?;
        // Dropping the writer on an error path flushes and closes the file.
        let mut index = BufWriter::new(index_file);

        let mut packages = Vec::new();
        for i in 1..=total {
            let package = self.write_package(&base_dir, i)?;

            writeln!(index, "{}", package.relative_dir.display()).map_err(|source| {
                FixtureError::WriteFailed {
                    path: index_path.clone(),
                    source,
                }
            })?;

            packages.push(package);

            if let Some(ref callback) = self.progress {
                callback(i, total);
            }
        }

        index.flush().map_err(|source| FixtureError::WriteFailed {
            path: index_path.clone(),
            source,
        })?;

        let report = GenerationReport {
            index_path,
            packages,
        };

        info!(
            packages = report.package_count(),
            files = report.total_files(),
            bytes = report.total_payload_bytes(),
            index = %report.index_path.display(),
            "Fixture generation complete"
        );

        Ok(report)
    }

    /// Write one package directory: manifest plus payload files.
    fn write_package(&mut self, base_dir: &Path, index: u32) -> FixtureResult<GeneratedPackage> {
        let name = package_name(index);
        let relative_dir = package_relative_dir(&name);
        let package_dir = base_dir.join(&relative_dir);
        let files_dir = package_dir.join(FILES_DIR);

        create_dir_all(&files_dir)?;

        let manifest_path = package_dir.join(MANIFEST_FILE);
        let manifest = Manifest::new(&name).render().map_err(|source| {
            FixtureError::SerializeFailed {
                path: manifest_path.clone(),
                source,
            }
        })?;
        fs::write(&manifest_path, manifest).map_err(|source| FixtureError::WriteFailed {
            path: manifest_path.clone(),
            source,
        })?;

        let file_count = self.config.files_per_package;
        let mut payload_bytes = 0;
        for j in 1..=file_count {
            payload_bytes += self.write_payload(&files_dir.join(payload_filename(j)))?;
        }

        debug!(
            package = %name,
            files = file_count,
            bytes = payload_bytes,
            "Package written"
        );

        Ok(GeneratedPackage {
            index,
            name,
            relative_dir,
            file_count,
            payload_bytes,
        })
    }

    /// Write one payload file of random size and content. Returns its length.
    fn write_payload(&mut self, path: &Path) -> FixtureResult<u64> {
        let size = self.rng.random_range(PAYLOAD_SIZE_RANGE);
        let mut data = vec![0u8; size];
        self.rng.fill_bytes(&mut data);

        fs::write(path, &data).map_err(|source| FixtureError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(size as u64)
    }
}

/// Generate `package_count` packages of `files_per_package` files each under
/// `base_dir`, using the thread-local RNG.
pub fn generate(
    base_dir: impl Into<PathBuf>,
    package_count: u32,
    files_per_package: u32,
) -> FixtureResult<GenerationReport> {
    let config = GeneratorConfig::new(base_dir)
        .with_package_count(package_count)
        .with_files_per_package(files_per_package);
    FixtureGenerator::new(config).generate()
}

fn create_dir_all(path: &Path) -> FixtureResult<()> {
    fs::create_dir_all(path).map_err(|source| FixtureError::CreateDirFailed {
        path: path.to_path_buf(),
        source,
    })
}
