//! Locator and query resolution.
//!
//! Both resolvers walk the live tree, so the node they return is the tree's own node: the
//! same page reached through a path query, a `section name` query or a locator has the same
//! [`NodeId`].

use mandex_locator::{Locator, Query};
use tracing::{debug, warn};

use crate::{DocumentTree, NodeId, Storage, TreeError};

/// The outcome of resolving a locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// The addressed node.
    pub node: NodeId,
    /// Row of the matched node at each level, starting with the section's row.
    pub rows: Vec<usize>,
}

impl Resolved {
    /// Returns the row of the addressed node within its parent.
    pub fn row(&self) -> usize {
        *self.rows.last().expect("a resolution always includes the section row")
    }
}

impl<S: Storage> DocumentTree<S> {
    /// Resolves a locator to a node.
    ///
    /// Each segment is matched against the children of the previous node by exact title;
    /// the first segment with no match fails the whole resolution.
    pub fn resolve_locator(&mut self, locator: &Locator) -> Result<Resolved, TreeError> {
        let section = locator.section();
        let mut current = self.section(section);
        let mut rows = vec![section.index()];

        for segment in locator.segments() {
            let Some((row, child)) = self.child_named(current, segment)? else {
                return Err(TreeError::SegmentNotFound {
                    segment: segment.clone(),
                    parent: self.locator(current).to_string(),
                });
            };
            rows.push(row);
            current = child;
        }

        Ok(Resolved {
            node: current,
            rows,
        })
    }

    /// Resolves command-line arguments to a page.
    ///
    /// See [`Query::parse`] for the accepted shapes; more than two arguments is rejected
    /// before storage is touched.
    pub fn resolve_args<A: AsRef<str>>(&mut self, args: &[A]) -> Result<NodeId, TreeError> {
        let query = Query::parse(args, self.layout())?;
        self.resolve_query(&query)
    }

    /// Resolves a classified query to a page.
    ///
    /// The result always carries a document. A bare name is looked up in every section in
    /// ascending order and the first match wins. A missing section directory reads as empty;
    /// any other storage failure is logged, and a bare name keeps looking but reports that
    /// failure instead of "not found" when no later section has the page.
    pub fn resolve_query(&mut self, query: &Query) -> Result<NodeId, TreeError> {
        let not_found = || TreeError::PageNotFound {
            query: query.to_string(),
        };

        match query {
            Query::Index => {
                let locator = self.index_page().clone();
                self.resolve_document(&locator)?.ok_or_else(not_found)
            }
            Query::Document(path) => {
                let locator = self.layout().path_to_locator(path)?;
                self.resolve_document(&locator)?.ok_or_else(not_found)
            }
            Query::Name(name) => {
                let sections: Vec<NodeId> = self.sections().collect();
                let mut unreadable = None;
                for section in sections {
                    match self.find_document(section, name) {
                        Ok(Some(page)) => return Ok(page),
                        Ok(None) => {}
                        Err(e) if e.is_missing() => debug!(error = %e, "section directory missing"),
                        Err(e) => {
                            warn!(error = %e, "section unreadable, trying the next one");
                            unreadable.get_or_insert(e);
                        }
                    }
                }
                Err(unreadable.unwrap_or_else(not_found))
            }
            Query::SectionPage { section, name } => {
                let section = self.section(*section);
                match self.find_document(section, name) {
                    Ok(found) => found.ok_or_else(not_found),
                    Err(e) if e.is_missing() => Err(not_found()),
                    Err(e) => {
                        warn!(error = %e, "section unreadable");
                        Err(e)
                    }
                }
            }
        }
    }

    /// Resolves a locator and keeps the result only if it carries a document.
    ///
    /// Missing segments and missing directories read as "no document".
    fn resolve_document(&mut self, locator: &Locator) -> Result<Option<NodeId>, TreeError> {
        match self.resolve_locator(locator) {
            Ok(resolved) if self.node(resolved.node).has_document() => Ok(Some(resolved.node)),
            Ok(_) | Err(TreeError::SegmentNotFound { .. }) => Ok(None),
            Err(e) if e.is_missing() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Finds a direct child of `parent` titled `name` that carries a document.
    fn find_document(&mut self, parent: NodeId, name: &str) -> Result<Option<NodeId>, TreeError> {
        Ok(self
            .child_named(parent, name)?
            .map(|(_, child)| child)
            .filter(|child| self.node(*child).has_document()))
    }
}
