//! The document tree.
//!
//! [`DocumentTree`] holds every node of one corpus in an arena. The eight sections exist from
//! the start; everything below them is discovered lazily the first time a node's children
//! are requested, by listing the node's directory through [`Storage`].

use std::{
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
};

use globset::GlobSet;
use mandex_locator::{CorpusLayout, Locator, SectionNumber};
use tracing::{debug, warn};

use crate::{
    FsStorage, Storage, TreeError,
    node::{Children, Node, NodeId, NodeKind},
    section::SECTIONS,
};

/// What a directory listing revealed about one title.
#[derive(Debug, Default, Clone, Copy)]
struct Discovered {
    /// A directory with this title exists.
    directory: bool,
    /// A document file with this title exists.
    document: bool,
}

/// A lazily discovered tree of sections, subsections and pages.
#[derive(Debug)]
pub struct DocumentTree<S = FsStorage> {
    /// Where the corpus lives and how documents are named.
    layout: CorpusLayout,
    /// File names matching these globs are skipped during discovery.
    exclude: GlobSet,
    /// Page shown for an empty query.
    index_page: Locator,
    /// Directory listings and page bytes come from here.
    storage: S,
    /// Node arena; slots `0..8` hold the sections in order.
    nodes: Vec<Node>,
}

impl DocumentTree<FsStorage> {
    /// Creates a tree over the real filesystem.
    pub fn open(layout: CorpusLayout) -> Self {
        Self::with_storage(layout, FsStorage)
    }
}

impl<S: Storage> DocumentTree<S> {
    /// Creates a tree that reads through `storage`.
    pub fn with_storage(layout: CorpusLayout, storage: S) -> Self {
        let nodes = SECTIONS
            .iter()
            .map(|info| Node::new(NodeKind::Section(info.section()), info.display_name(), None))
            .collect();
        Self {
            layout,
            exclude: GlobSet::empty(),
            index_page: Locator::default_index_page(),
            storage,
            nodes,
        }
    }

    /// Skips directory entries whose file name matches `exclude`.
    pub fn with_exclude(mut self, exclude: GlobSet) -> Self {
        self.exclude = exclude;
        self
    }

    /// Sets the page returned for an empty query.
    pub fn with_index_page(mut self, index_page: Locator) -> Self {
        self.index_page = index_page;
        self
    }

    /// Returns the corpus layout.
    pub fn layout(&self) -> &CorpusLayout {
        &self.layout
    }

    /// Returns the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the locator of the index page.
    pub fn index_page(&self) -> &Locator {
        &self.index_page
    }

    /// Returns the node for a section.
    pub fn section(&self, section: SectionNumber) -> NodeId {
        NodeId::new(section.index())
    }

    /// Iterates over the section nodes in ascending order.
    pub fn sections(&self) -> impl DoubleEndedIterator<Item = NodeId> + use<S> {
        SectionNumber::all().map(|section| NodeId::new(section.index()))
    }

    /// Returns a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.slot()]
    }

    /// Returns the number of nodes discovered so far, sections included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the enclosing node, or `None` for a section.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Returns the section a node belongs to.
    pub fn section_of(&self, id: NodeId) -> SectionNumber {
        let mut current = id;
        loop {
            let node = self.node(current);
            match (node.kind, node.parent) {
                (NodeKind::Section(section), _) => return section,
                (_, Some(parent)) => current = parent,
                (_, None) => unreachable!("only sections lack a parent"),
            }
        }
    }

    /// Returns the children of a node, discovering them on first call.
    ///
    /// Discovery happens once; later calls return the same list even if storage has changed.
    /// If listing fails the error is returned and the node stays undiscovered, so the next
    /// call tries again. Pages have no children and never touch storage.
    pub fn children_of(&mut self, id: NodeId) -> Result<&[NodeId], TreeError> {
        if !self.node(id).is_reified() {
            self.reify(id)?;
        }
        Ok(self
            .node(id)
            .reified_children()
            .expect("node was just reified"))
    }

    /// Returns the child of `parent` titled `name` together with its row.
    pub fn child_named(
        &mut self,
        parent: NodeId,
        name: &str,
    ) -> Result<Option<(usize, NodeId)>, TreeError> {
        let children = self.children_of(parent)?.to_vec();
        Ok(children
            .into_iter()
            .enumerate()
            .find(|(_, child)| self.node(*child).name == name))
    }

    /// Returns the row of a node: its position among its parent's children, or among the
    /// sections for a section.
    pub fn row_of(&self, id: NodeId) -> usize {
        let node = self.node(id);
        match (node.kind, node.parent) {
            (NodeKind::Section(section), _) => section.index(),
            (_, Some(parent)) => self
                .node(parent)
                .reified_children()
                .and_then(|siblings| siblings.iter().position(|s| *s == id))
                .expect("a child is always listed by its parent"),
            (_, None) => unreachable!("only sections lack a parent"),
        }
    }

    /// Sets the expanded/collapsed state of a node.
    pub fn set_open(&mut self, id: NodeId, open: bool) {
        self.nodes[id.slot()].is_open = open;
    }

    /// Returns the storage path of a node.
    ///
    /// Sections and subsections map to directories, pages to their document file.
    pub fn path(&self, id: NodeId) -> PathBuf {
        let node = self.node(id);
        match (node.kind, node.parent) {
            (NodeKind::Section(section), _) => self.layout.section_dir(section),
            (NodeKind::Subsection { .. }, Some(parent)) => self.path(parent).join(&node.name),
            (NodeKind::Page, Some(parent)) => self
                .path(parent)
                .join(self.layout.document_file_name(&node.name)),
            (_, None) => unreachable!("only sections lack a parent"),
        }
    }

    /// Returns the document file of a node, if it has one.
    pub fn document_path(&self, id: NodeId) -> Option<PathBuf> {
        let node = self.node(id);
        if !node.has_document() {
            return None;
        }
        let parent = node.parent?;
        Some(
            self.path(parent)
                .join(self.layout.document_file_name(&node.name)),
        )
    }

    /// Returns the canonical locator of a node.
    pub fn locator(&self, id: NodeId) -> Locator {
        let mut names = Vec::new();
        let mut current = id;
        loop {
            let node = self.node(current);
            match (node.kind, node.parent) {
                (NodeKind::Section(section), _) => {
                    names.reverse();
                    return Locator::new(section, names);
                }
                (_, Some(parent)) => {
                    names.push(node.name.clone());
                    current = parent;
                }
                (_, None) => unreachable!("only sections lack a parent"),
            }
        }
    }

    /// Lists a node's directory and records its children.
    ///
    /// Directories become subsections and documents become pages; a directory and a
    /// document sharing a title merge into one subsection that owns the document. Children
    /// are ordered by title, byte-wise and case-sensitive.
    fn reify(&mut self, id: NodeId) -> Result<(), TreeError> {
        let dir = self.path(id);
        let entries = match self.storage.list_dir(&dir) {
            Ok(entries) => entries,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                debug!(path = %dir.display(), "directory does not exist");
                return Err(TreeError::storage(dir, source));
            }
            Err(source) => {
                warn!(path = %dir.display(), error = %source, "failed to list directory");
                return Err(TreeError::storage(dir, source));
            }
        };

        let mut titles: BTreeMap<String, Discovered> = BTreeMap::new();
        for entry in entries {
            if self.is_excluded(&entry.name) {
                continue;
            }
            if entry.is_dir {
                titles.entry(entry.name).or_default().directory = true;
            } else if let Some(title) = self.layout.document_title(&entry.name) {
                titles.entry(title.to_string()).or_default().document = true;
            }
        }

        let mut children = Vec::with_capacity(titles.len());
        for (title, found) in titles {
            let kind = if found.directory {
                NodeKind::Subsection {
                    has_document: found.document,
                }
            } else {
                NodeKind::Page
            };
            children.push(self.push(Node::new(kind, title, Some(id))));
        }

        debug!(path = %dir.display(), children = children.len(), "reified node");
        self.nodes[id.slot()].children = Children::Reified(children);
        Ok(())
    }

    /// Returns true if a directory entry is hidden by the exclude patterns.
    fn is_excluded(&self, name: &str) -> bool {
        !self.exclude.is_empty() && self.exclude.is_match(Path::new(name))
    }

    /// Adds a node to the arena.
    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Returns true if `id` refers to a node in this tree.
    pub fn contains(&self, id: NodeId) -> bool {
        id.slot() < self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap, io};

    use globset::{Glob, GlobSetBuilder};

    use super::*;
    use crate::{PageContent, StorageEntry};

    /// In-memory storage with mutable listings and a listing counter.
    #[derive(Default)]
    struct MemStorage {
        /// Directory listings by path.
        dirs: RefCell<HashMap<PathBuf, Vec<StorageEntry>>>,
        /// Number of `list_dir` calls.
        listings: RefCell<usize>,
    }

    impl MemStorage {
        fn set(&self, dir: &str, entries: Vec<StorageEntry>) {
            self.dirs.borrow_mut().insert(PathBuf::from(dir), entries);
        }
    }

    impl Storage for MemStorage {
        fn list_dir(&self, dir: &Path) -> io::Result<Vec<StorageEntry>> {
            *self.listings.borrow_mut() += 1;
            self.dirs
                .borrow()
                .get(dir)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such directory"))
        }

        fn load(&self, _path: &Path) -> io::Result<PageContent> {
            Ok(PageContent::empty())
        }
    }

    fn tree(storage: &MemStorage) -> DocumentTree<&MemStorage> {
        DocumentTree::with_storage(CorpusLayout::new("/corpus", "md"), storage)
    }

    fn section(n: u64) -> SectionNumber {
        SectionNumber::new(n).unwrap()
    }

    fn names(tree: &DocumentTree<&MemStorage>, ids: &[NodeId]) -> Vec<String> {
        ids.iter().map(|id| tree.node(*id).name.clone()).collect()
    }

    #[test]
    fn starts_with_eight_sections() {
        let storage = MemStorage::default();
        let tree = tree(&storage);
        assert_eq!(tree.node_count(), 8);
        let sections: Vec<NodeId> = tree.sections().collect();
        assert_eq!(sections.len(), 8);
        assert_eq!(tree.node(sections[5]).name(), "6 - Games");
        assert_eq!(tree.path(sections[5]), PathBuf::from("/corpus/man6"));
        assert_eq!(*storage.listings.borrow(), 0);
    }

    #[test]
    fn sections_iterate_in_reverse() {
        let storage = MemStorage::default();
        let tree = tree(&storage);
        let reversed: Vec<NodeId> = tree.sections().rev().collect();
        assert_eq!(reversed.len(), 8);
        assert_eq!(tree.node(reversed[0]).name(), "8 - Sysadmin Tools");
        assert_eq!(reversed.last(), tree.sections().next().as_ref());
    }

    #[test]
    fn children_are_sorted_case_sensitively() {
        let storage = MemStorage::default();
        storage.set(
            "/corpus/man1",
            vec![
                StorageEntry::file("ls.md"),
                StorageEntry::file("Zeta.md"),
                StorageEntry::dir("Applications"),
                StorageEntry::file("cat.md"),
                StorageEntry::file("notes.txt"),
            ],
        );
        let mut tree = tree(&storage);
        let s1 = tree.section(section(1));
        let children = tree.children_of(s1).unwrap().to_vec();
        assert_eq!(
            names(&tree, &children),
            ["Applications", "Zeta", "cat", "ls"]
        );
        assert_eq!(tree.node(children[0]).kind(), NodeKind::Subsection { has_document: false });
        assert!(tree.node(children[3]).is_page());
    }

    #[test]
    fn directory_and_document_merge_regardless_of_order() {
        for entries in [
            vec![StorageEntry::dir("x"), StorageEntry::file("x.md")],
            vec![StorageEntry::file("x.md"), StorageEntry::dir("x")],
        ] {
            let storage = MemStorage::default();
            storage.set("/corpus/man2", entries);
            storage.set("/corpus/man2/x", vec![StorageEntry::file("y.md")]);
            let mut tree = tree(&storage);

            let s2 = tree.section(section(2));
            let children = tree.children_of(s2).unwrap().to_vec();
            assert_eq!(children.len(), 1);
            let x = children[0];
            assert_eq!(tree.node(x).kind(), NodeKind::Subsection { has_document: true });
            assert_eq!(tree.path(x), PathBuf::from("/corpus/man2/x"));
            assert_eq!(
                tree.document_path(x),
                Some(PathBuf::from("/corpus/man2/x.md"))
            );
            assert_eq!(tree.children_of(x).unwrap().len(), 1);
        }
    }

    #[test]
    fn reification_is_idempotent() {
        let storage = MemStorage::default();
        storage.set("/corpus/man1", vec![StorageEntry::file("ls.md")]);
        let mut tree = tree(&storage);
        let s1 = tree.section(section(1));

        let first = tree.children_of(s1).unwrap().to_vec();
        storage.set(
            "/corpus/man1",
            vec![StorageEntry::file("ls.md"), StorageEntry::file("cp.md")],
        );
        let second = tree.children_of(s1).unwrap().to_vec();

        assert_eq!(first, second);
        assert_eq!(*storage.listings.borrow(), 1);
    }

    #[test]
    fn failed_reification_is_retried() {
        let storage = MemStorage::default();
        let mut tree = tree(&storage);
        let s4 = tree.section(section(4));

        let err = tree.children_of(s4).unwrap_err();
        assert!(err.is_missing());
        assert!(!tree.node(s4).is_reified());

        storage.set("/corpus/man4", vec![StorageEntry::file("null.md")]);
        assert_eq!(tree.children_of(s4).unwrap().len(), 1);
        assert_eq!(*storage.listings.borrow(), 2);
    }

    #[test]
    fn pages_never_touch_storage() {
        let storage = MemStorage::default();
        storage.set("/corpus/man1", vec![StorageEntry::file("ls.md")]);
        let mut tree = tree(&storage);
        let s1 = tree.section(section(1));
        let ls = tree.children_of(s1).unwrap()[0];

        assert!(tree.children_of(ls).unwrap().is_empty());
        assert_eq!(*storage.listings.borrow(), 1);
    }

    #[test]
    fn paths_rows_and_locators() {
        let storage = MemStorage::default();
        storage.set(
            "/corpus/man1",
            vec![StorageEntry::dir("Applications"), StorageEntry::file("ls.md")],
        );
        storage.set(
            "/corpus/man1/Applications",
            vec![StorageEntry::file("Browser.md"), StorageEntry::file("Assistant.md")],
        );
        let mut tree = tree(&storage);
        let s1 = tree.section(section(1));
        let apps = tree.child_named(s1, "Applications").unwrap().unwrap().1;
        let (row, browser) = tree.child_named(apps, "Browser").unwrap().unwrap();

        assert_eq!(row, 1);
        assert_eq!(tree.row_of(browser), 1);
        assert_eq!(tree.row_of(s1), 0);
        assert_eq!(tree.parent_of(browser), Some(apps));
        assert_eq!(tree.parent_of(s1), None);
        assert_eq!(tree.section_of(browser), section(1));
        assert_eq!(
            tree.path(browser),
            PathBuf::from("/corpus/man1/Applications/Browser.md")
        );
        assert_eq!(tree.document_path(apps), None);
        assert_eq!(tree.locator(browser).to_string(), "1/Applications/Browser");
        assert_eq!(tree.locator(s1).to_string(), "1");
    }

    #[test]
    fn excluded_entries_are_skipped() {
        let storage = MemStorage::default();
        storage.set(
            "/corpus/man1",
            vec![
                StorageEntry::file("ls.md"),
                StorageEntry::file("ls.draft.md"),
                StorageEntry::dir(".git"),
            ],
        );
        let mut builder = GlobSetBuilder::new();
        builder.add(Glob::new("*.draft.md").unwrap());
        builder.add(Glob::new(".*").unwrap());
        let mut tree = tree(&storage).with_exclude(builder.build().unwrap());

        let s1 = tree.section(section(1));
        let children = tree.children_of(s1).unwrap().to_vec();
        assert_eq!(names(&tree, &children), ["ls"]);
    }

    #[test]
    fn open_state() {
        let storage = MemStorage::default();
        let mut tree = tree(&storage);
        let s3 = tree.section(section(3));
        assert!(!tree.node(s3).is_open());
        tree.set_open(s3, true);
        assert!(tree.node(s3).is_open());
    }
}
