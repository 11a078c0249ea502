//! Package manifest format.
//!
//! Every generated package carries a `manifest.json` holding a single line
//! of compact JSON:
//!
//! ```text
//! {"name":"pkg001","version":"1.0.0"}
//! ```

use semver::Version;
use serde::{Deserialize, Serialize};

/// Version string written into every generated manifest.
pub const MANIFEST_VERSION: Version = Version::new(1, 0, 0);

/// Synthetic package descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Package name, identical to the package directory name.
    pub name: String,

    /// Package version. Always [`MANIFEST_VERSION`] for generated fixtures.
    pub version: Version,
}

impl Manifest {
    /// Create a manifest for the named package at [`MANIFEST_VERSION`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: MANIFEST_VERSION,
        }
    }

    /// Render the manifest file contents, including the trailing newline.
    ///
    /// ```
    /// use pkgforge::fixture::Manifest;
    ///
    /// assert_eq!(
    ///     Manifest::new("pkg001").render().unwrap(),
    ///     "{\"name\":\"pkg001\",\"version\":\"1.0.0\"}\n"
    /// );
    /// ```
    pub fn render(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Parse manifest file contents.
    pub fn parse(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents.trim_end())
    }
}
