//! Simulated package installation.
//!
//! [`InstallSimulator`] walks the packages listed in an index and "installs"
//! each one into an output directory the way a package manager would:
//!
//! 1. Read the package manifest (packages without one are skipped)
//! 2. Read every regular file under `files/` and checksum it
//! 3. Copy the file into `<output>/<package>/` next to a `.meta` sidecar
//! 4. Append `<package> installed` to `<output>/install_db.txt`
//!
//! The database append is the only shared state; it is serialized through a
//! mutex so serial and parallel runs write the same lines.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::checksum::{payload_checksum, render_meta, META_SUFFIX};
use super::config::{ExecutionMode, SimulatorConfig};
use super::error::{InstallError, InstallResult};
use crate::fixture::{Manifest, FILES_DIR, MANIFEST_FILE};

/// Install database filename inside the output directory.
pub const INSTALL_DB_FILE: &str = "install_db.txt";

/// Why a package was not installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// `manifest.json` could not be read.
    MissingManifest,
    /// `files/` is absent or not a directory.
    MissingFilesDir,
    /// The package path has no final component to name the install after.
    UnnamedPath,
}

/// Result of installing a single package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageOutcome {
    /// Package copied into the output directory.
    Installed { files: u64, bytes: u64 },
    /// Package left out of the install.
    Skipped(SkipReason),
}

/// Summary of an install run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationReport {
    /// Scheduling mode the run used. Parallel runs record the pool's actual
    /// worker count, so the `Display` form always names the thread count.
    pub mode: ExecutionMode,
    /// Worker threads that processed packages (1 for serial runs).
    pub threads: usize,
    /// Packages listed in the index.
    pub packages_total: usize,
    /// Packages installed.
    pub installed: usize,
    /// Packages skipped.
    pub skipped: usize,
    /// Payload files copied.
    pub files_copied: u64,
    /// Payload bytes copied.
    pub bytes_copied: u64,
    /// Wall-clock time spent processing packages.
    pub elapsed: Duration,
}

impl SimulationReport {
    fn new(mode: ExecutionMode, threads: usize, packages_total: usize) -> Self {
        Self {
            mode,
            threads,
            packages_total,
            installed: 0,
            skipped: 0,
            files_copied: 0,
            bytes_copied: 0,
            elapsed: Duration::ZERO,
        }
    }

    fn record(&mut self, outcome: PackageOutcome) {
        match outcome {
            PackageOutcome::Installed { files, bytes } => {
                self.installed += 1;
                self.files_copied += files;
                self.bytes_copied += bytes;
            }
            PackageOutcome::Skipped(_) => self.skipped += 1,
        }
    }
}

/// Append-only record of installed packages shared by all workers.
struct InstallDb {
    path: PathBuf,
    file: Mutex<File>,
}

impl InstallDb {
    fn open(path: PathBuf) -> InstallResult<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| InstallError::WriteFailed {
                path: path.clone(),
                source,
            })?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    fn record(&self, package: &str) -> InstallResult<()> {
        let mut file = self.file.lock();
        writeln!(file, "{} installed", package).map_err(|source| InstallError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }
}

/// Installs packages listed in an index into an output directory.
#[derive(Debug, Clone)]
pub struct InstallSimulator {
    config: SimulatorConfig,
}

impl InstallSimulator {
    /// Create a simulator with the given configuration.
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// The configuration this simulator was created with.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Install every package directory in `packages`.
    ///
    /// The install database is appended to, never truncated, so repeated
    /// runs against the same output directory accumulate lines.
    pub fn run(&self, packages: &[PathBuf]) -> InstallResult<SimulationReport> {
        let output_dir = &self.config.output_dir;
        create_dir_all(output_dir)?;
        let db = InstallDb::open(output_dir.join(INSTALL_DB_FILE))?;

        info!(
            packages = packages.len(),
            output = %output_dir.display(),
            mode = %self.config.mode,
            "Starting install simulation"
        );

        let start = Instant::now();
        let (threads, outcomes) = match self.config.mode {
            ExecutionMode::Serial => {
                let outcomes = packages
                    .iter()
                    .map(|pkg| self.install_package(pkg, &db))
                    .collect::<InstallResult<Vec<_>>>()?;
                (1, outcomes)
            }
            ExecutionMode::Parallel { threads } => {
                let mut builder = rayon::ThreadPoolBuilder::new();
                if let Some(n) = threads {
                    builder = builder.num_threads(n);
                }
                let pool = builder
                    .build()
                    .map_err(|e| InstallError::ThreadPool(e.to_string()))?;

                let outcomes = pool.install(|| {
                    packages
                        .par_iter()
                        .map(|pkg| self.install_package(pkg, &db))
                        .collect::<InstallResult<Vec<_>>>()
                })?;
                (pool.current_num_threads(), outcomes)
            }
        };

        let mode = match self.config.mode {
            ExecutionMode::Serial => ExecutionMode::Serial,
            ExecutionMode::Parallel { .. } => ExecutionMode::Parallel {
                threads: Some(threads),
            },
        };
        let mut report = SimulationReport::new(mode, threads, packages.len());
        for outcome in outcomes {
            report.record(outcome);
        }
        report.elapsed = start.elapsed();

        info!(
            installed = report.installed,
            skipped = report.skipped,
            files = report.files_copied,
            bytes = report.bytes_copied,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "Install simulation complete"
        );

        Ok(report)
    }

    /// Install a single package directory.
    fn install_package(&self, pkg_dir: &Path, db: &InstallDb) -> InstallResult<PackageOutcome> {
        let manifest_path = pkg_dir.join(MANIFEST_FILE);
        let manifest = match fs::read(&manifest_path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(
                    manifest = %manifest_path.display(),
                    error = %e,
                    "Cannot open manifest, skipping package"
                );
                return Ok(PackageOutcome::Skipped(SkipReason::MissingManifest));
            }
        };
        if let Err(e) = Manifest::parse(&String::from_utf8_lossy(&manifest)) {
            // Contents are informational only; an odd manifest still installs.
            debug!(manifest = %manifest_path.display(), error = %e, "Unrecognized manifest");
        }

        let files_dir = pkg_dir.join(FILES_DIR);
        if !files_dir.is_dir() {
            warn!(package = %pkg_dir.display(), "No files directory, skipping package");
            return Ok(PackageOutcome::Skipped(SkipReason::MissingFilesDir));
        }

        let Some(package) = pkg_dir.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            warn!(package = %pkg_dir.display(), "Package path has no name, skipping");
            return Ok(PackageOutcome::Skipped(SkipReason::UnnamedPath));
        };

        let out_pkg = self.config.output_dir.join(&package);
        create_dir_all(&out_pkg)?;

        let mut files = 0;
        let mut bytes = 0;
        for source in payload_files(&files_dir)? {
            bytes += install_file(&source, &out_pkg)?;
            files += 1;
        }

        db.record(&package)?;

        debug!(package = %package, files, bytes, "Package installed");
        Ok(PackageOutcome::Installed { files, bytes })
    }
}

/// Regular files under `files_dir`, sorted by name.
fn payload_files(files_dir: &Path) -> InstallResult<Vec<PathBuf>> {
    let read_err = |source| InstallError::ReadFailed {
        path: files_dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(files_dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Copy one payload file into `out_pkg` with its checksum sidecar.
/// Returns the number of bytes copied.
fn install_file(source: &Path, out_pkg: &Path) -> InstallResult<u64> {
    let data = fs::read(source).map_err(|e| InstallError::ReadFailed {
        path: source.to_path_buf(),
        source: e,
    })?;
    let checksum = payload_checksum(&data);

    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let target = out_pkg.join(&name);
    write_file(&target, &data)?;

    let meta = out_pkg.join(format!("{}{}", name, META_SUFFIX));
    write_file(&meta, render_meta(checksum).as_bytes())?;

    Ok(data.len() as u64)
}

fn write_file(path: &Path, contents: &[u8]) -> InstallResult<()> {
    fs::write(path, contents).map_err(|source| InstallError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

fn create_dir_all(path: &Path) -> InstallResult<()> {
    fs::create_dir_all(path).map_err(|source| InstallError::CreateDirFailed {
        path: path.to_path_buf(),
        source,
    })
}
