//! Shared test helpers.

#![allow(dead_code)]

use hostman::HostsFile;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temp directory for hosts file fixtures.
pub fn temp_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("hostman_test_")
        .tempdir()
        .expect("temp dir")
}

/// Write `content` to a fresh `hosts` file; keep the TempDir alive for the test.
pub fn hosts_fixture(content: &str) -> (TempDir, PathBuf) {
    let dir = temp_dir();
    let path = dir.path().join("hosts");
    std::fs::write(&path, content).expect("write hosts fixture");
    (dir, path)
}

/// Open and load the hosts file at `path`.
pub fn open_loaded(path: &std::path::Path) -> HostsFile {
    hostman::logging::init_test_tracing();
    let mut hosts = HostsFile::open(path).expect("open hosts");
    hosts.load().expect("load hosts");
    hosts
}

pub fn read(path: &std::path::Path) -> String {
    std::fs::read_to_string(path).expect("read hosts")
}
