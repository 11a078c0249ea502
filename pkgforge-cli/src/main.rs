//! pkgforge CLI - Command-line interface
//!
//! Writes package fixture trees and simulates installing them. Running the
//! binary with no subcommand generates the default tree (100 packages of 20
//! files) in the working directory.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use pkgforge::logging::{init_logging, LoggingConfig};

mod commands;
mod error;

use commands::generate::GenerateArgs;
use commands::install::InstallArgs;
use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "pkgforge")]
#[command(version, about = "Synthesize package fixture trees and simulate installing them")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Also write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate pkgs/ and packages.txt in the working directory
    Generate(GenerateArgs),

    /// Install every package listed in an index into an output directory
    Install(InstallArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let logging = LoggingConfig::default()
        .with_verbose(cli.verbose)
        .with_log_file(cli.log_file);
    let _guard = init_logging(&logging)?;

    match cli.command.unwrap_or_else(|| Commands::Generate(GenerateArgs::default())) {
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Install(args) => commands::install::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_means_default_generate() {
        let cli = Cli::try_parse_from(["pkgforge"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["pkgforge", "generate"]).unwrap();
        match cli.command {
            Some(Commands::Generate(args)) => assert_eq!(args, GenerateArgs::default()),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_generate_positional_counts() {
        let cli = Cli::try_parse_from(["pkgforge", "generate", "2", "1"]).unwrap();
        match cli.command {
            Some(Commands::Generate(args)) => {
                assert_eq!(args.packages, 2);
                assert_eq!(args.files, 1);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_generate_rejects_negative_counts() {
        assert!(Cli::try_parse_from(["pkgforge", "generate", "-5", "1"]).is_err());
        assert!(Cli::try_parse_from(["pkgforge", "generate", "ten"]).is_err());
    }

    #[test]
    fn test_install_parallel_with_threads() {
        let cli = Cli::try_parse_from([
            "pkgforge",
            "install",
            "packages.txt",
            "out_parallel",
            "--parallel",
            "--threads",
            "4",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Install(args)) => {
                assert_eq!(args.index, PathBuf::from("packages.txt"));
                assert_eq!(args.output_dir, PathBuf::from("out_parallel"));
                assert!(args.parallel);
                assert_eq!(args.threads, Some(4));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_install_threads_requires_parallel() {
        assert!(
            Cli::try_parse_from(["pkgforge", "install", "packages.txt", "out", "--threads", "2"])
                .is_err()
        );
        assert!(Cli::try_parse_from([
            "pkgforge",
            "install",
            "packages.txt",
            "out",
            "--parallel",
            "--threads",
            "0"
        ])
        .is_err());
    }

    #[test]
    fn test_install_requires_paths() {
        assert!(Cli::try_parse_from(["pkgforge", "install"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["pkgforge", "generate", "1", "0", "-v", "--log-file", "run.log"])
                .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.log_file, Some(PathBuf::from("run.log")));
    }
}
