//! CLI error types.

use std::fmt;

use pkgforge::fixture::FixtureError;
use pkgforge::install::InstallError;
use pkgforge::logging::LoggingError;

/// Errors surfaced by CLI commands.
#[derive(Debug)]
pub enum CliError {
    /// Fixture generation failed.
    Generate(FixtureError),

    /// Install simulation failed.
    Install(InstallError),

    /// Logging could not be set up.
    Logging(LoggingError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Generate(e) => write!(f, "Fixture generation failed: {}", e),
            CliError::Install(e) => write!(f, "Install simulation failed: {}", e),
            CliError::Logging(e) => write!(f, "Logging setup failed: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Generate(e) => Some(e),
            CliError::Install(e) => Some(e),
            CliError::Logging(e) => Some(e),
        }
    }
}

impl From<FixtureError> for CliError {
    fn from(e: FixtureError) -> Self {
        CliError::Generate(e)
    }
}

impl From<InstallError> for CliError {
    fn from(e: InstallError) -> Self {
        CliError::Install(e)
    }
}

impl From<LoggingError> for CliError {
    fn from(e: LoggingError) -> Self {
        CliError::Logging(e)
    }
}
