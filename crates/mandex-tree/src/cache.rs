//! Page content cache.
//!
//! Page bodies are loaded on first request and kept for the lifetime of the cache, so that
//! repeated display and search requests for the same page share one mapping.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use tracing::debug;

use crate::{PageContent, Storage, TreeError};

/// Memoizes page content by path.
///
/// Failed loads are not recorded, so a later request for a file that has since appeared
/// succeeds.
#[derive(Debug, Default)]
pub struct ContentCache {
    /// Loaded pages keyed by their resolved path.
    pages: HashMap<PathBuf, Arc<PageContent>>,
}

impl ContentCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the content of the page at `path`, loading it through `storage` on first use.
    ///
    /// An empty path yields empty content without touching storage.
    pub fn load<S: Storage + ?Sized>(
        &mut self,
        storage: &S,
        path: &Path,
    ) -> Result<Arc<PageContent>, TreeError> {
        if path.as_os_str().is_empty() {
            return Ok(Arc::new(PageContent::empty()));
        }
        if let Some(content) = self.pages.get(path) {
            return Ok(Arc::clone(content));
        }

        let content = storage
            .load(path)
            .map_err(|source| TreeError::storage(path, source))?;
        debug!(path = %path.display(), bytes = content.len(), "cached page content");

        let content = Arc::new(content);
        self.pages.insert(path.to_path_buf(), Arc::clone(&content));
        Ok(content)
    }

    /// Returns already-cached content without loading.
    pub fn get(&self, path: &Path) -> Option<Arc<PageContent>> {
        self.pages.get(path).cloned()
    }

    /// Returns the number of cached pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns true if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
