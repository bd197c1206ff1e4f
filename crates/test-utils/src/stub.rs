//! Stub executables standing in for `vula`, `systemctl` and terminals.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::TempDir;

/// A temporary directory of executable `sh` scripts.
pub struct StubDir {
    dir: TempDir,
}

impl StubDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create stub dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write an executable script `name` whose body is `body`.
    pub fn script(&self, name: &str, body: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write stub script");
        let mut perms = fs::metadata(&path).expect("stat stub").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("chmod stub");
        path
    }

    /// A path inside the stub dir that does not exist.
    pub fn missing(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

impl Default for StubDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Poll until `path` exists with non-empty contents, or `limit` passes.
pub async fn wait_for_file(path: &Path, limit: Duration) -> Option<String> {
    let deadline = tokio::time::Instant::now() + limit;
    loop {
        if let Ok(contents) = fs::read_to_string(path) {
            if !contents.is_empty() {
                return Some(contents);
            }
        }
        if tokio::time::Instant::now() >= deadline {
            return None;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}
