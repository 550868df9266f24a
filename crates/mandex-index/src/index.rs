//! The document index: a row/column/parent view of a [`DocumentTree`].

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use mandex_locator::{CorpusLayout, Locator, SECTION_COUNT};
use mandex_tree::{ContentCache, DocumentTree, FsStorage, NodeId, PageContent, Storage, TreeError};
use tracing::{debug, warn};

use crate::{GridIndex, IconState};

/// Adapts a document tree to the addressing contract of a tree view.
///
/// The index owns the tree and the content cache. Every query that needs children reifies
/// on demand, so the index takes `&mut self` for anything that might touch storage.
#[derive(Debug)]
pub struct DocumentIndex<S = FsStorage> {
    /// The node hierarchy.
    tree: DocumentTree<S>,
    /// Page bodies loaded so far.
    cache: ContentCache,
}

impl DocumentIndex<FsStorage> {
    /// Creates an index over a corpus on the real filesystem.
    pub fn open(layout: CorpusLayout) -> Self {
        Self::new(DocumentTree::open(layout))
    }
}

impl<S: Storage> DocumentIndex<S> {
    /// Wraps an existing tree.
    pub fn new(tree: DocumentTree<S>) -> Self {
        Self {
            tree,
            cache: ContentCache::new(),
        }
    }

    /// Returns the underlying tree.
    pub fn tree(&self) -> &DocumentTree<S> {
        &self.tree
    }

    /// Returns the underlying tree mutably.
    pub fn tree_mut(&mut self) -> &mut DocumentTree<S> {
        &mut self.tree
    }

    /// Returns the content cache.
    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }

    /// Returns the index of the child at `row` under `parent`.
    ///
    /// A `None` parent addresses the sections. Returns `None` when the row or column is
    /// out of range, or when the parent's children cannot be listed.
    pub fn index(
        &mut self,
        row: usize,
        column: usize,
        parent: Option<GridIndex>,
    ) -> Option<GridIndex> {
        if column != 0 {
            return None;
        }
        let node = match parent {
            None => self.tree.sections().nth(row)?,
            Some(parent) => match self.tree.children_of(parent.node) {
                Ok(children) => *children.get(row)?,
                Err(e) => {
                    debug!(error = %e, "no children to index");
                    return None;
                }
            },
        };
        Some(GridIndex {
            row,
            column,
            node,
        })
    }

    /// Returns the index of the node's parent, or `None` for a section.
    pub fn parent_index(&self, index: GridIndex) -> Option<GridIndex> {
        let parent = self.tree.parent_of(index.node)?;
        Some(self.grid(parent))
    }

    /// Returns the number of children under `parent`.
    ///
    /// A listing failure reads as zero; the next call tries again.
    pub fn row_count(&mut self, parent: Option<GridIndex>) -> usize {
        let Some(parent) = parent else {
            return usize::from(SECTION_COUNT);
        };
        match self.tree.children_of(parent.node) {
            Ok(children) => children.len(),
            Err(e) => {
                debug!(error = %e, "counting rows of unreadable node");
                0
            }
        }
    }

    /// Returns the number of columns, which is always one.
    pub fn column_count(&self, _parent: Option<GridIndex>) -> usize {
        1
    }

    /// Returns true if the node has at least one child.
    pub fn has_children(&mut self, index: GridIndex) -> bool {
        self.row_count(Some(index)) > 0
    }

    /// Expands or collapses a node.
    ///
    /// Nodes without children are left untouched. Returns whether the state was applied.
    pub fn set_open(&mut self, index: GridIndex, open: bool) -> bool {
        if !self.has_children(index) {
            return false;
        }
        self.tree.set_open(index.node, open);
        true
    }

    /// Returns the expanded/collapsed state of a node.
    pub fn is_open(&self, index: GridIndex) -> bool {
        self.tree.node(index.node).is_open()
    }

    /// Returns the label shown for a node.
    pub fn display(&self, index: GridIndex) -> &str {
        self.tree.node(index.node).name()
    }

    /// Returns the icon shown for a node.
    ///
    /// Pages, and folders already listed as empty, show as leaves. A folder not yet listed
    /// keeps the folder icon until something asks for its children.
    pub fn icon(&self, index: GridIndex) -> IconState {
        let node = self.tree.node(index.node);
        if node.is_page() || node.reified_children().is_some_and(<[NodeId]>::is_empty) {
            IconState::Leaf
        } else if node.is_open() {
            IconState::SectionExpanded
        } else {
            IconState::SectionCollapsed
        }
    }

    /// Returns the body of a node's document.
    ///
    /// `None` for nodes without a document, or when the document cannot be read.
    pub fn search_text(&mut self, index: GridIndex) -> Option<Arc<PageContent>> {
        let path = self.tree.document_path(index.node)?;
        match self.cache.load(self.tree.storage(), &path) {
            Ok(content) => Some(content),
            Err(e) => {
                warn!(error = %e, "page body unavailable");
                None
            }
        }
    }

    /// Resolves a locator to an index.
    pub fn index_from_locator(&mut self, locator: &Locator) -> Result<GridIndex, TreeError> {
        let resolved = self.tree.resolve_locator(locator)?;
        Ok(GridIndex {
            row: resolved.row(),
            column: 0,
            node: resolved.node,
        })
    }

    /// Resolves a document path to an index.
    ///
    /// Paths outside the corpus, or that do not name an existing document, give `None`.
    pub fn index_from_path(&mut self, path: &Path) -> Option<GridIndex> {
        if !self.tree.layout().is_corpus_document(path) {
            return None;
        }
        let locator = self.tree.layout().path_to_locator(path).ok()?;
        let index = self.index_from_locator(&locator).ok()?;
        self.tree.node(index.node).has_document().then_some(index)
    }

    /// Resolves command-line arguments to the index of a page.
    pub fn index_from_query<A: AsRef<str>>(&mut self, args: &[A]) -> Result<GridIndex, TreeError> {
        let node = self.tree.resolve_args(args)?;
        Ok(self.grid(node))
    }

    /// Returns the canonical locator of a node.
    pub fn locator_of(&self, index: GridIndex) -> Locator {
        self.tree.locator(index.node)
    }

    /// Returns the name of a node.
    pub fn page_name(&self, index: GridIndex) -> &str {
        self.display(index)
    }

    /// Returns the document file of a node, if it has one.
    pub fn page_path(&self, index: GridIndex) -> Option<PathBuf> {
        self.tree.document_path(index.node)
    }

    /// Returns the conventional `name(section)` reference, e.g. `printf(3)`.
    pub fn page_and_section(&self, index: GridIndex) -> String {
        format!(
            "{}({})",
            self.page_name(index),
            self.tree.section_of(index.node)
        )
    }

    /// Logs the already-discovered part of the tree at debug level.
    ///
    /// Never touches storage.
    pub fn dump(&self) {
        let mut stack: Vec<(NodeId, usize)> = self.tree.sections().rev().map(|s| (s, 0)).collect();
        while let Some((id, depth)) = stack.pop() {
            let node = self.tree.node(id);
            debug!(
                "{:indent$}{} [{}]",
                "",
                node.name(),
                self.icon(self.grid(id)).label(),
                indent = depth * 2
            );
            if let Some(children) = node.reified_children() {
                stack.extend(children.iter().rev().map(|child| (*child, depth + 1)));
            }
        }
    }

    /// Builds the index of a node from its position in the tree.
    pub(crate) fn grid(&self, node: NodeId) -> GridIndex {
        GridIndex {
            row: self.tree.row_of(node),
            column: 0,
            node,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn corpus() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (rel, body) in [
            ("man1/ls.md", "# ls\n"),
            ("man1/Applications/Browser.md", "# Browser\n"),
            ("man3/printf.md", "# printf\n"),
        ] {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, body).unwrap();
        }
        dir
    }

    #[test]
    fn top_level_has_eight_rows() {
        let dir = corpus();
        let mut index = DocumentIndex::open(CorpusLayout::new(dir.path(), "md"));
        assert_eq!(index.row_count(None), 8);
        assert_eq!(index.column_count(None), 1);
        assert!(index.index(8, 0, None).is_none());
        assert!(index.index(0, 1, None).is_none());

        let games = index.index(5, 0, None).unwrap();
        assert_eq!(index.display(games), "6 - Games");
        assert_eq!(index.parent_index(games), None);
    }

    #[test]
    fn missing_section_has_no_rows() {
        let dir = corpus();
        let mut index = DocumentIndex::open(CorpusLayout::new(dir.path(), "md"));
        let s2 = index.index(1, 0, None).unwrap();
        assert_eq!(index.row_count(Some(s2)), 0);
        assert!(index.index(0, 0, Some(s2)).is_none());
    }

    #[test]
    fn page_and_section_reference() {
        let dir = corpus();
        let mut index = DocumentIndex::open(CorpusLayout::new(dir.path(), "md"));
        let printf = index.index_from_query(&["printf"]).unwrap();
        assert_eq!(index.page_and_section(printf), "printf(3)");
        assert_eq!(index.page_name(printf), "printf");
        assert_eq!(
            index.page_path(printf),
            Some(dir.path().join("man3/printf.md"))
        );
    }

    #[test]
    fn icons_follow_open_state() {
        let dir = corpus();
        let mut index = DocumentIndex::open(CorpusLayout::new(dir.path(), "md"));
        let s1 = index.index(0, 0, None).unwrap();
        assert_eq!(index.icon(s1), IconState::SectionCollapsed);
        assert!(index.set_open(s1, true));
        assert_eq!(index.icon(s1), IconState::SectionExpanded);

        let ls = index.index_from_locator(&Locator::parse("1/ls").unwrap()).unwrap();
        assert_eq!(index.icon(ls), IconState::Leaf);
    }

    #[test]
    fn empty_subsection_is_a_leaf() {
        let dir = corpus();
        fs::create_dir_all(dir.path().join("man1/Empty")).unwrap();
        let mut index = DocumentIndex::open(CorpusLayout::new(dir.path(), "md"));

        let empty = index
            .index_from_locator(&Locator::parse("1/Empty").unwrap())
            .unwrap();
        assert!(!index.has_children(empty));
        assert!(!index.set_open(empty, true));
        assert_eq!(index.icon(empty), IconState::Leaf);

        let apps = index
            .index_from_locator(&Locator::parse("1/Applications").unwrap())
            .unwrap();
        assert!(index.has_children(apps));
        assert_eq!(index.icon(apps), IconState::SectionCollapsed);
    }

    #[test]
    fn index_from_path_requires_a_document() {
        let dir = corpus();
        let mut index = DocumentIndex::open(CorpusLayout::new(dir.path(), "md"));

        let browser = index
            .index_from_path(&dir.path().join("man1/Applications/Browser.md"))
            .unwrap();
        assert_eq!(index.locator_of(browser).to_string(), "1/Applications/Browser");

        assert!(index.index_from_path(&dir.path().join("man1/Applications.md")).is_none());
        assert!(index.index_from_path(Path::new("/elsewhere/man1/ls.md")).is_none());
        assert!(index.index_from_path(&dir.path().join("man1/ls.txt")).is_none());
    }
}
