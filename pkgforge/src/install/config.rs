//! Configuration for the install simulator.

use std::fmt;
use std::path::PathBuf;

/// How packages are scheduled during an install run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// One package at a time, in index order, on the calling thread.
    #[default]
    Serial,

    /// Packages spread across a rayon thread pool.
    Parallel {
        /// Worker count. `None` uses rayon's default (one per CPU).
        threads: Option<usize>,
    },
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::Serial => write!(f, "serial"),
            ExecutionMode::Parallel { threads: None } => write!(f, "parallel"),
            ExecutionMode::Parallel { threads: Some(n) } => write!(f, "parallel, threads={}", n),
        }
    }
}

/// Configuration for the install simulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Directory installed packages and the install database are written to.
    pub output_dir: PathBuf,

    /// Scheduling mode.
    pub mode: ExecutionMode,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("out"),
            mode: ExecutionMode::Serial,
        }
    }
}

impl SimulatorConfig {
    /// Create a serial configuration installing into the given directory.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    /// Set the scheduling mode.
    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Run in parallel with an optional worker count.
    pub fn with_parallel(self, threads: Option<usize>) -> Self {
        self.with_mode(ExecutionMode::Parallel { threads })
    }
}
