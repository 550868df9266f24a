//! Term matching over the document index.

use mandex_tree::Storage;
use tracing::{debug, warn};

use crate::{DocumentIndex, GridIndex, SearchOptions};

impl<S: Storage> DocumentIndex<S> {
    /// Returns true if the node matches `term`, ignoring case.
    ///
    /// A node matches when its name contains the term, or when it has a document whose
    /// body contains the term. Unreadable bodies never match.
    pub fn matches(&mut self, index: GridIndex, term: &str) -> bool {
        self.name_matches(index, term) || self.body_matches(index, term)
    }

    /// Walks the whole tree in pre-order and returns every node matching `term`.
    ///
    /// Directories are discovered as the walk reaches them. Missing and unreadable ones are
    /// skipped; only the latter are logged as warnings.
    pub fn search(&mut self, term: &str, options: SearchOptions) -> Vec<GridIndex> {
        let mut results = Vec::new();
        if options.limit == Some(0) {
            return results;
        }

        let mut stack: Vec<_> = self.tree().sections().rev().collect();
        while let Some(node) = stack.pop() {
            let index = self.grid(node);
            let found = if options.names_only {
                self.name_matches(index, term)
            } else {
                self.matches(index, term)
            };
            if found {
                results.push(index);
                if options.limit.is_some_and(|limit| results.len() >= limit) {
                    break;
                }
            }

            match self.tree_mut().children_of(node) {
                Ok(children) => stack.extend(children.iter().rev()),
                Err(e) if e.is_missing() => debug!(error = %e, "search skipping missing directory"),
                Err(e) => warn!(error = %e, "search skipping unreadable directory"),
            }
        }

        debug!(term, matches = results.len(), "search finished");
        results
    }

    /// Case-insensitive name containment.
    fn name_matches(&self, index: GridIndex, term: &str) -> bool {
        self.display(index)
            .to_lowercase()
            .contains(&term.to_lowercase())
    }

    /// Case-insensitive body containment; false without a readable document.
    fn body_matches(&mut self, index: GridIndex, term: &str) -> bool {
        self.search_text(index)
            .is_some_and(|content| content.contains_ignore_case(term))
    }
}
