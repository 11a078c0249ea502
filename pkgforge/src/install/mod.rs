//! Install simulation over generated fixtures.
//!
//! Reads a package index (as written by [`crate::fixture`]) and simulates a
//! package manager installing each listed package into an output directory.
//! Used to benchmark serial against parallel processing on the same tree.
//!
//! # Output
//!
//! ```text
//! <output>/
//! ├── install_db.txt          pkg001 installed ...
//! └── pkg001/
//!     ├── f1.bin              byte-for-byte copy
//!     └── f1.bin.meta         checksum:<decimal>
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use pkgforge::install::{read_index, InstallSimulator, SimulatorConfig};
//!
//! let packages = read_index(Path::new("packages.txt"))?;
//! let config = SimulatorConfig::new("out_parallel").with_parallel(None);
//! let report = InstallSimulator::new(config).run(&packages)?;
//! println!("installed {} packages in {:?}", report.installed, report.elapsed);
//! # Ok::<(), pkgforge::install::InstallError>(())
//! ```

mod checksum;
mod config;
mod error;
mod index;
mod simulator;

pub use checksum::{parse_meta, payload_checksum, render_meta, META_SUFFIX};
pub use config::{ExecutionMode, SimulatorConfig};
pub use error::{InstallError, InstallResult};
pub use index::{parse_index, read_index};
pub use simulator::{
    InstallSimulator, PackageOutcome, SimulationReport, SkipReason, INSTALL_DB_FILE,
};
