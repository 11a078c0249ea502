//! Tracing subscriber setup.
//!
//! Logs go to stderr so generated output on stdout stays clean. When a log
//! file is configured, a second non-blocking layer writes the same events
//! without ANSI colours; keep the returned [`LoggingGuard`] alive until exit
//! or buffered lines are lost.
//!
//! `RUST_LOG` overrides the configured level.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Errors that can occur while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log file's directory could not be created.
    #[error("failed to create log directory {}: {source}", path.display())]
    CreateDirFailed { path: PathBuf, source: io::Error },

    /// The log file path has no file name.
    #[error("invalid log file path: {}", .0.display())]
    InvalidPath(PathBuf),

    /// The filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber was already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Init(String),
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. `info`).
    pub level: String,

    /// Optional file receiving a copy of every event.
    pub log_file: Option<PathBuf>,

    /// Colourize stderr output.
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_file: None,
            ansi: true,
        }
    }
}

impl LoggingConfig {
    /// Switch between `debug` and `info` levels.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.level = if verbose { "debug" } else { "info" }.to_string();
        self
    }

    /// Also write events to the given file.
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    /// Enable or disable ANSI colours on stderr.
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }
}

/// Keeps the background log-file writer running. Flushes on drop.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Install the global tracing subscriber.
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard, LoggingError> {
    let filter = build_filter(config)?;

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_timer(LocalTime::rfc_3339())
        .with_target(false)
        .with_ansi(config.ansi);

    let (file_layer, file_guard) = match &config.log_file {
        Some(path) => {
            let (dir, file_name) = split_log_path(path)?;
            fs::create_dir_all(dir).map_err(|source| LoggingError::CreateDirFailed {
                path: dir.to_path_buf(),
                source,
            })?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_timer(LocalTime::rfc_3339())
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.is_empty() => {
            EnvFilter::try_new(directives).map_err(|e| LoggingError::Filter(e.to_string()))
        }
        _ => default_filter(config),
    }
}

fn default_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(&config.level).map_err(|e| LoggingError::Filter(e.to_string()))
}

/// Split a log file path into its directory (`.` when bare) and file name.
fn split_log_path(path: &Path) -> Result<(&Path, &std::ffi::OsStr), LoggingError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| LoggingError::InvalidPath(path.to_path_buf()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok((dir, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(config.log_file.is_none());
        assert!(config.ansi);
    }

    #[test]
    fn test_builder_pattern() {
        let config = LoggingConfig::default()
            .with_verbose(true)
            .with_log_file(Some(PathBuf::from("logs/pkgforge.log")))
            .with_ansi(false);

        assert_eq!(config.level, "debug");
        assert_eq!(config.log_file, Some(PathBuf::from("logs/pkgforge.log")));
        assert!(!config.ansi);
        assert_eq!(config.with_verbose(false).level, "info");
    }

    #[test]
    fn test_default_filter_rejects_bad_directive() {
        let config = LoggingConfig {
            level: "pkgforge=notalevel".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            default_filter(&config),
            Err(LoggingError::Filter(_))
        ));
        assert!(default_filter(&LoggingConfig::default()).is_ok());
    }

    #[test]
    fn test_split_log_path() {
        let (dir, name) = split_log_path(Path::new("logs/run.log")).unwrap();
        assert_eq!(dir, Path::new("logs"));
        assert_eq!(name, "run.log");

        let (dir, name) = split_log_path(Path::new("run.log")).unwrap();
        assert_eq!(dir, Path::new("."));
        assert_eq!(name, "run.log");

        assert!(split_log_path(Path::new("/")).is_err());
    }
}
