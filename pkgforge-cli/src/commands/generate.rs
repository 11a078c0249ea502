//! Generate command - write the package fixture tree.

use std::path::PathBuf;

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use pkgforge::fixture::{
    FixtureGenerator, GenerateProgressCallback, GeneratorConfig, DEFAULT_FILES_PER_PACKAGE,
    DEFAULT_PACKAGE_COUNT,
};

use crate::error::CliError;

/// Arguments for `pkgforge generate`.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct GenerateArgs {
    /// Number of packages to generate
    #[arg(default_value_t = DEFAULT_PACKAGE_COUNT)]
    pub packages: u32,

    /// Number of payload files in each package
    #[arg(default_value_t = DEFAULT_FILES_PER_PACKAGE)]
    pub files: u32,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            packages: DEFAULT_PACKAGE_COUNT,
            files: DEFAULT_FILES_PER_PACKAGE,
        }
    }
}

/// Run the generate command in the working directory.
pub fn run(args: GenerateArgs) -> Result<(), CliError> {
    run_in(PathBuf::from("."), args, true)
}

/// Run the generate command under `base_dir`.
pub fn run_in(base_dir: PathBuf, args: GenerateArgs, show_progress: bool) -> Result<(), CliError> {
    let config = GeneratorConfig::new(base_dir)
        .with_package_count(args.packages)
        .with_files_per_package(args.files);

    let progress = if show_progress {
        ProgressBar::new(u64::from(args.packages))
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner} [{bar:40}] {pos}/{len} packages")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );

    let bar = progress.clone();
    let callback: GenerateProgressCallback = Box::new(move |done: u32, _total: u32| {
        bar.set_position(u64::from(done));
    });
    let mut generator = FixtureGenerator::new(config).with_progress(callback);

    let result = generator.generate();
    progress.finish_and_clear();
    let report = result?;

    println!(
        "Generated {} packages ({} files, {} bytes)",
        report.package_count(),
        report.total_files(),
        report.total_payload_bytes()
    );
    println!("Index: {}", report.index_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_args() {
        let args = GenerateArgs::default();
        assert_eq!(args.packages, 100);
        assert_eq!(args.files, 20);
    }

    #[test]
    fn test_run_in_writes_tree() {
        let temp = TempDir::new().unwrap();
        run_in(
            temp.path().to_path_buf(),
            GenerateArgs {
                packages: 2,
                files: 1,
            },
            false,
        )
        .unwrap();

        let index = fs::read_to_string(temp.path().join("packages.txt")).unwrap();
        assert_eq!(index, "pkgs/pkg001\npkgs/pkg002\n");
        assert!(temp.path().join("pkgs/pkg002/files/f1.bin").is_file());
    }

    #[test]
    fn test_run_in_reports_io_failure() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pkgs"), "blocker").unwrap();

        let err = run_in(temp.path().to_path_buf(), GenerateArgs::default(), false).unwrap_err();
        assert!(matches!(err, CliError::Generate(_)));
    }
}
