//! Common test utilities for integration tests
//!
//! Provides shared fixtures for secret files and settings files.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory for test isolation
///
/// Returns a TempDir that will be cleaned up when dropped.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write a secret file named `name` with `content` into `dir`
pub fn write_secret(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write secret file");
    path
}

/// Write a settings file whose password points at `password_file`
///
/// `extra` is appended under the `server:` mapping and must be indented
/// by two spaces.
#[allow(dead_code)]
pub fn write_settings(dir: &TempDir, password_file: &std::path::Path, extra: &str) -> PathBuf {
    let path = dir.path().join("pmaconf.yaml");
    let yaml = format!(
        "server:\n  password_file: {}\n{extra}",
        password_file.display()
    );
    fs::write(&path, yaml).expect("Failed to write settings file");
    path
}

/// Environment variables integration tests may set; held unset elsewhere
#[allow(dead_code)]
pub const PMACONF_TEST_VARS: [&str; 4] = [
    "PMACONF_SERVER__HOST",
    "PMACONF_SERVER__PORT",
    "PMACONF_SERVER__PASSWORD_FILE",
    "PMACONF_METADATA__TABLE_PREFIX",
];
