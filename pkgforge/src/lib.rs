//! pkgforge - package fixture trees for package-manager benchmarks
//!
//! This library synthesizes directory trees of fake packages and simulates
//! installing them, so package-manager style tooling can be exercised and
//! timed against realistic on-disk layouts.
//!
//! # Modules
//!
//! - [`fixture`] - Generates `pkgs/pkgNNN/` directories with a manifest and
//!   random payload files, plus the `packages.txt` index
//! - [`install`] - Reads the index and installs every package into an output
//!   directory, serially or across a thread pool
//! - [`logging`] - Tracing subscriber setup shared by the CLI

pub mod fixture;
pub mod install;
pub mod logging;
