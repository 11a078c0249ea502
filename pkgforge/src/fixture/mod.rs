//! Package fixture generation.
//!
//! Synthesizes a tree of fake packages for exercising package-manager style
//! tooling: numbered package directories, each holding a JSON manifest and a
//! set of randomly sized binary payload files, plus an index file listing the
//! package directories in creation order.
//!
//! # Layout
//!
//! ```text
//! <base>/
//! ├── packages.txt            pkgs/pkg001
//! │                           pkgs/pkg002 ...
//! └── pkgs/
//!     ├── pkg001/
//!     │   ├── manifest.json
//!     │   └── files/
//!     │       ├── f1.bin
//!     │       └── f2.bin ...
//!     └── pkg002/ ...
//! ```
//!
//! # Example
//!
//! ```no_run
//! use pkgforge::fixture::{FixtureGenerator, GeneratorConfig};
//!
//! let config = GeneratorConfig::new(".")
//!     .with_package_count(10)
//!     .with_files_per_package(5);
//! let report = FixtureGenerator::new(config).generate()?;
//! println!("wrote {} packages", report.package_count());
//! # Ok::<(), pkgforge::fixture::FixtureError>(())
//! ```

mod config;
mod error;
mod generator;
mod manifest;
mod naming;

pub use config::{
    GeneratorConfig, DEFAULT_FILES_PER_PACKAGE, DEFAULT_PACKAGE_COUNT, MAX_PAYLOAD_SIZE,
    MIN_PAYLOAD_SIZE, PAYLOAD_SIZE_RANGE,
};
pub use error::{FixtureError, FixtureResult};
pub use generator::{
    generate, FixtureGenerator, GenerateProgressCallback, GeneratedPackage, GenerationReport,
};
pub use manifest::{Manifest, MANIFEST_VERSION};
pub use naming::{
    package_name, package_relative_dir, parse_package_index, payload_filename, FILES_DIR,
    INDEX_FILE, MANIFEST_FILE, ROOT_DIR,
};
