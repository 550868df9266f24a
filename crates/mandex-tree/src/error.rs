//! Error types for tree traversal and resolution.

use std::{io, path::PathBuf};

use mandex_locator::LocatorError;
use thiserror::Error;

/// Errors that can occur while reifying, resolving or reading the document tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The locator or query could not be parsed.
    #[error(transparent)]
    Locator(#[from] LocatorError),

    /// A locator segment has no matching child.
    #[error("no entry named '{segment}' in {parent}")]
    SegmentNotFound {
        /// The segment that did not match.
        segment: String,
        /// Locator of the node that was searched.
        parent: String,
    },

    /// A query resolved to no existing document.
    #[error("no matching page: {query}")]
    PageNotFound {
        /// The query, as typed.
        query: String,
    },

    /// A directory listing or file mapping failed.
    #[error("storage unavailable at {path}: {source}")]
    StorageUnavailable {
        /// Path that could not be listed or mapped.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl TreeError {
    /// Creates a `StorageUnavailable` error for a path.
    pub(crate) fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::StorageUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Returns true if this is a storage error caused by a missing file or directory.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::StorageUnavailable { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
