//! Integration tests for fixture generation.
//!
//! These tests drive the public API end to end and check the on-disk tree
//! against the layout consumers rely on:
//! - one directory per package, numbered from 1
//! - exactly one manifest and M payload files per package
//! - an index listing every package in creation order
//!
//! Run with: `cargo test --test generate_integration`

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use pkgforge::fixture::{
    package_name, parse_package_index, FixtureGenerator, GeneratorConfig, Manifest,
    MAX_PAYLOAD_SIZE, MIN_PAYLOAD_SIZE,
};

// ============================================================================
// Helper Functions
// ============================================================================

fn generate_seeded(base: &Path, packages: u32, files: u32, seed: u64) {
    let config = GeneratorConfig::new(base)
        .with_package_count(packages)
        .with_files_per_package(files);
    FixtureGenerator::with_rng(config, StdRng::seed_from_u64(seed))
        .generate()
        .expect("generation should succeed");
}

fn read_index(base: &Path) -> Vec<String> {
    fs::read_to_string(base.join("packages.txt"))
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

fn entry_names(dir: &Path) -> HashSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_every_package_has_manifest_and_payloads() {
    let temp = TempDir::new().unwrap();
    generate_seeded(temp.path(), 12, 5, 1);

    let packages = entry_names(&temp.path().join("pkgs"));
    assert_eq!(packages.len(), 12);

    for i in 1..=12 {
        let name = package_name(i);
        let pkg_dir = temp.path().join("pkgs").join(&name);

        let expected: HashSet<String> = ["manifest.json", "files"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(entry_names(&pkg_dir), expected);

        let payloads = entry_names(&pkg_dir.join("files"));
        let expected: HashSet<String> = (1..=5).map(|j| format!("f{}.bin", j)).collect();
        assert_eq!(payloads, expected);

        for payload in payloads {
            let len = fs::metadata(pkg_dir.join("files").join(&payload))
                .unwrap()
                .len() as usize;
            assert!(
                (MIN_PAYLOAD_SIZE..=MAX_PAYLOAD_SIZE).contains(&len),
                "{}/{} has {} bytes",
                name,
                payload,
                len
            );
        }
    }
}

#[test]
fn test_manifests_parse_and_match_directory() {
    let temp = TempDir::new().unwrap();
    generate_seeded(temp.path(), 4, 0, 2);

    for line in read_index(temp.path()) {
        let pkg_dir = temp.path().join(&line);
        let contents = fs::read_to_string(pkg_dir.join("manifest.json")).unwrap();
        let manifest = Manifest::parse(&contents).unwrap();

        assert_eq!(
            Some(manifest.name.as_str()),
            pkg_dir.file_name().and_then(|n| n.to_str())
        );
        assert_eq!(manifest.version.to_string(), "1.0.0");
        assert!(contents.ends_with('\n'));
    }
}

// ============================================================================
// Index
// ============================================================================

#[test]
fn test_index_lists_packages_in_creation_order() {
    let temp = TempDir::new().unwrap();
    generate_seeded(temp.path(), 15, 1, 3);

    let lines = read_index(temp.path());
    assert_eq!(lines.len(), 15);

    let indices: Vec<u32> = lines
        .iter()
        .map(|line| {
            let name = Path::new(line).file_name().unwrap().to_str().unwrap();
            parse_package_index(name).unwrap()
        })
        .collect();
    assert_eq!(indices, (1..=15).collect::<Vec<_>>());

    for line in &lines {
        assert!(line.starts_with("pkgs/"));
        assert!(temp.path().join(line).is_dir());
    }
}

#[test]
fn test_index_is_truncated_on_smaller_rerun() {
    let temp = TempDir::new().unwrap();
    generate_seeded(temp.path(), 5, 0, 4);
    generate_seeded(temp.path(), 2, 0, 5);

    // Directories from the first run remain; only the index shrinks.
    assert_eq!(read_index(temp.path()), vec!["pkgs/pkg001", "pkgs/pkg002"]);
    assert!(temp.path().join("pkgs/pkg005").is_dir());
}

#[test]
fn test_rerun_same_parameters_is_idempotent() {
    let temp = TempDir::new().unwrap();
    generate_seeded(temp.path(), 3, 2, 6);
    let first = read_index(temp.path());

    generate_seeded(temp.path(), 3, 2, 7);

    assert_eq!(read_index(temp.path()), first);
    assert_eq!(entry_names(&temp.path().join("pkgs")).len(), 3);
}
