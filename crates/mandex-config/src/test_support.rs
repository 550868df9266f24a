//! Scratch directories for mandex-config unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// A temporary directory tree, removed on drop.
pub struct Scratch {
    /// Owns the directory.
    tmp: TempDir,
}

impl Scratch {
    /// Creates an empty scratch tree.
    pub fn new() -> Self {
        Self {
            tmp: tempfile::tempdir().unwrap(),
        }
    }

    /// Returns the top of the tree.
    pub fn path(&self) -> &Path {
        self.tmp.path()
    }

    /// Creates `rel` and its parents, returning the full path.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.tmp.path().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes `body` to `rel/.mandex.toml`; an empty `rel` means the top of the tree.
    pub fn config(&self, rel: &str, body: &str) -> PathBuf {
        let path = self.dir(rel).join(CONFIG_FILENAME);
        fs::write(&path, body).unwrap();
        path
    }
}
