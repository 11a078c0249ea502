//! Install command - simulate installing the generated packages.

use std::path::PathBuf;

use clap::Args;
use pkgforge::install::{read_index, ExecutionMode, InstallSimulator, SimulatorConfig};

use crate::error::CliError;

/// Arguments for `pkgforge install`.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct InstallArgs {
    /// Package index file (one package directory per line)
    pub index: PathBuf,

    /// Directory to install packages into
    pub output_dir: PathBuf,

    /// Process packages across a thread pool
    #[arg(long)]
    pub parallel: bool,

    /// Worker threads for --parallel (default: one per CPU)
    #[arg(long, requires = "parallel", value_parser = clap::value_parser!(u32).range(1..))]
    pub threads: Option<u32>,
}

impl InstallArgs {
    fn mode(&self) -> ExecutionMode {
        if self.parallel {
            ExecutionMode::Parallel {
                threads: self.threads.map(|n| n as usize),
            }
        } else {
            ExecutionMode::Serial
        }
    }
}

/// Run the install command.
pub fn run(args: InstallArgs) -> Result<(), CliError> {
    let packages = read_index(&args.index)?;
    let config = SimulatorConfig::new(args.output_dir.clone()).with_mode(args.mode());

    let report = InstallSimulator::new(config).run(&packages)?;

    println!(
        "Processed {} packages in {:.6} seconds ({})",
        report.packages_total,
        report.elapsed.as_secs_f64(),
        report.mode
    );
    if report.skipped > 0 {
        println!("Skipped {} packages", report.skipped);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(index: PathBuf, output_dir: PathBuf) -> InstallArgs {
        InstallArgs {
            index,
            output_dir,
            parallel: false,
            threads: None,
        }
    }

    #[test]
    fn test_mode_from_args() {
        let mut a = args(PathBuf::from("packages.txt"), PathBuf::from("out"));
        assert_eq!(a.mode(), ExecutionMode::Serial);

        a.parallel = true;
        assert_eq!(a.mode(), ExecutionMode::Parallel { threads: None });

        a.threads = Some(2);
        assert_eq!(a.mode(), ExecutionMode::Parallel { threads: Some(2) });
    }

    #[test]
    fn test_run_missing_index_fails() {
        let temp = TempDir::new().unwrap();
        let err = run(args(temp.path().join("packages.txt"), temp.path().join("out"))).unwrap_err();
        assert!(matches!(err, CliError::Install(_)));
    }

    #[test]
    fn test_run_installs_listed_packages() {
        let temp = TempDir::new().unwrap();
        let pkg = temp.path().join("pkgs/pkg001");
        fs::create_dir_all(pkg.join("files")).unwrap();
        fs::write(pkg.join("manifest.json"), "{\"name\":\"pkg001\",\"version\":\"1.0.0\"}\n")
            .unwrap();
        fs::write(pkg.join("files/f1.bin"), [1u8, 2, 3]).unwrap();

        let index = temp.path().join("packages.txt");
        fs::write(&index, format!("{}\n", pkg.display())).unwrap();

        let output = temp.path().join("out");
        run(args(index, output.clone())).unwrap();

        assert_eq!(fs::read(output.join("pkg001/f1.bin")).unwrap(), vec![1, 2, 3]);
        assert_eq!(
            fs::read_to_string(output.join("install_db.txt")).unwrap(),
            "pkg001 installed\n"
        );
    }
}
