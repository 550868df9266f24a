//! Storage access.
//!
//! The tree and the content cache reach the filesystem only through the [`Storage`] trait,
//! so tests can substitute an instrumented or failing backend.

use std::{fs, fs::File, io, path::Path};

use tracing::trace;

use crate::PageContent;

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEntry {
    /// File or directory name (no path).
    pub name: String,
    /// Whether the entry is a directory (symlinks are followed).
    pub is_dir: bool,
}

impl StorageEntry {
    /// Creates a directory entry.
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    /// Creates a file entry.
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }
}

/// Blocking access to directory listings and page bytes.
pub trait Storage {
    /// Lists the entries of a directory, excluding `.` and `..`.
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<StorageEntry>>;

    /// Loads the full content of a page file.
    fn load(&self, path: &Path) -> io::Result<PageContent>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<StorageEntry>> {
        (**self).list_dir(dir)
    }

    fn load(&self, path: &Path) -> io::Result<PageContent> {
        (**self).load(path)
    }
}

/// The real filesystem. Pages are memory-mapped.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<StorageEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let Ok(name) = entry.file_name().into_string() else {
                trace!(path = %entry.path().display(), "skipping non-UTF-8 entry");
                continue;
            };
            // Follow symlinks; a dangling link is neither a page nor a subsection.
            let Ok(metadata) = fs::metadata(entry.path()) else {
                trace!(path = %entry.path().display(), "skipping unreadable entry");
                continue;
            };
            entries.push(StorageEntry {
                name,
                is_dir: metadata.is_dir(),
            });
        }
        Ok(entries)
    }

    fn load(&self, path: &Path) -> io::Result<PageContent> {
        PageContent::map(&File::open(path)?)
    }
}
