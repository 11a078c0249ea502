//! Payload checksums recorded next to installed files.
//!
//! Each installed file gets a `<name>.meta` sidecar containing
//! `checksum:<decimal>`. The checksum is an FNV-1a style 64-bit hash over
//! the file contents using offset basis `1469598103934665603`, which is the
//! value existing install databases were written with. It is not the
//! standard FNV-1a offset basis, so values differ from off-the-shelf FNV
//! implementations.

const OFFSET_BASIS: u64 = 1469598103934665603;
const FNV_PRIME: u64 = 1099511628211;

/// Suffix appended to an installed file's name for its checksum sidecar.
pub const META_SUFFIX: &str = ".meta";

/// 64-bit checksum of `data`.
///
/// ```
/// use pkgforge::install::payload_checksum;
///
/// assert_eq!(payload_checksum(b""), 1469598103934665603);
/// assert_eq!(payload_checksum(b"a"), 4953267810257967366);
/// ```
pub fn payload_checksum(data: &[u8]) -> u64 {
    data.iter().fold(OFFSET_BASIS, |hash, &byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Render the contents of a checksum sidecar file.
pub fn render_meta(checksum: u64) -> String {
    format!("checksum:{}\n", checksum)
}

/// Parse the contents of a checksum sidecar file.
pub fn parse_meta(contents: &str) -> Option<u64> {
    contents.trim_end().strip_prefix("checksum:")?.parse().ok()
}
