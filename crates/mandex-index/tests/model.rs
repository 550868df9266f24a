//! Integration tests for mandex-index.
//!
//! Exercises the addressing contract, search and content caching against corpora on disk.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{
    cell::{Cell, RefCell},
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use mandex_index::{DocumentIndex, GridIndex, IconState, SearchOptions};
use mandex_locator::{CorpusLayout, Locator};
use mandex_tree::{DocumentTree, FsStorage, PageContent, Storage, StorageEntry};

/// Filesystem storage that counts loads and can be told to fail them.
#[derive(Default)]
struct Instrumented {
    /// Number of `load` calls so far.
    loads: Cell<usize>,
    /// Whether loads should fail.
    fail_loads: Cell<bool>,
    /// Directory whose listing is refused.
    denied_dir: RefCell<Option<PathBuf>>,
}

impl Storage for Instrumented {
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<StorageEntry>> {
        if self.denied_dir.borrow().as_deref() == Some(dir) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        }
        FsStorage.list_dir(dir)
    }

    fn load(&self, path: &Path) -> io::Result<PageContent> {
        self.loads.set(self.loads.get() + 1);
        if self.fail_loads.get() {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        }
        FsStorage.load(path)
    }
}

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

/// Builds the corpus shared by most tests.
fn corpus() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "man1/ls.md", "# ls\nlist directory contents\n");
    write(root, "man1/greet.md", "# greet\nSays hello to the user.\n");
    write(root, "man1/Applications/Browser.md", "# Browser\n");
    write(root, "man1/Applications/Assistant.md", "# Assistant\n");
    write(root, "man2/x.md", "# x\n");
    write(root, "man2/x/y.md", "# y\n");
    write(root, "man3/printf.md", "# printf\nformatted output conversion\n");
    write(root, "man7/Help-index.md", "# Help\n");
    dir
}

fn layout(root: &Path) -> CorpusLayout {
    CorpusLayout::new(root, "md")
}

/// Collects every index reachable from the top level.
fn walk<S: Storage>(index: &mut DocumentIndex<S>) -> Vec<GridIndex> {
    let mut all = Vec::new();
    let mut pending: Vec<Option<GridIndex>> = vec![None];
    while let Some(parent) = pending.pop() {
        for row in 0..index.row_count(parent) {
            let child = index.index(row, 0, parent).unwrap();
            all.push(child);
            pending.push(Some(child));
        }
    }
    all
}

#[test]
fn test_index_round_trips_through_parent() {
    let dir = corpus();
    let mut index = DocumentIndex::open(layout(dir.path()));

    let all = walk(&mut index);
    assert!(all.len() > 8);
    for idx in all {
        let parent = index.parent_index(idx);
        assert_eq!(index.index(idx.row, idx.column, parent), Some(idx));
    }
}

#[test]
fn test_locator_round_trip() {
    let dir = corpus();
    let mut index = DocumentIndex::open(layout(dir.path()));

    for idx in walk(&mut index) {
        let locator = index.locator_of(idx);
        assert_eq!(index.index_from_locator(&locator).unwrap(), idx);
    }
}

#[test]
fn test_children_sorted_and_merged() {
    let dir = corpus();
    let mut index = DocumentIndex::open(layout(dir.path()));

    let s1 = index.index(0, 0, None).unwrap();
    let names: Vec<String> = (0..index.row_count(Some(s1)))
        .map(|row| {
            let child = index.index(row, 0, Some(s1)).unwrap();
            index.display(child).to_string()
        })
        .collect();
    assert_eq!(names, ["Applications", "greet", "ls"]);

    let s2 = index.index(1, 0, None).unwrap();
    assert_eq!(index.row_count(Some(s2)), 1);
    let x = index.index(0, 0, Some(s2)).unwrap();
    assert_eq!(index.page_path(x), Some(dir.path().join("man2/x.md")));
    assert_eq!(index.row_count(Some(x)), 1);
}

#[test]
fn test_search_is_case_insensitive_over_bodies() {
    let dir = corpus();
    let mut index = DocumentIndex::open(layout(dir.path()));

    let hits = index.search("HELLO", SearchOptions::default());
    assert_eq!(hits.len(), 1);
    assert_eq!(index.page_and_section(hits[0]), "greet(1)");

    assert!(index.search("goodbye", SearchOptions::default()).is_empty());
}

#[test]
fn test_search_names_only_and_limit() {
    let dir = corpus();
    let mut index = DocumentIndex::open(layout(dir.path()));

    let names_only = SearchOptions {
        names_only: true,
        limit: None,
    };
    assert!(index.search("hello", names_only).is_empty());

    let hits = index.search("s", names_only);
    let first = index.locator_of(hits[0]).to_string();
    assert_eq!(first, "1");

    let limited = SearchOptions {
        names_only: true,
        limit: Some(2),
    };
    assert_eq!(index.search("s", limited).len(), 2);
}

/// Returns the locators of every search hit.
fn search_locators<S: Storage>(index: &mut DocumentIndex<S>, term: &str) -> Vec<String> {
    index
        .search(term, SearchOptions::default())
        .into_iter()
        .map(|hit| index.locator_of(hit).to_string())
        .collect()
}

#[test]
fn test_search_skips_missing_sections() {
    let dir = corpus();
    let mut index = DocumentIndex::open(layout(dir.path()));

    assert!(search_locators(&mut index, "Help").contains(&"7/Help-index".to_string()));
}

#[test]
fn test_search_skips_unreadable_sections() {
    let dir = corpus();
    let storage = Instrumented::default();
    *storage.denied_dir.borrow_mut() = Some(dir.path().join("man1"));
    let mut index = DocumentIndex::new(DocumentTree::with_storage(layout(dir.path()), &storage));

    assert!(search_locators(&mut index, "Browser").is_empty());
    assert_eq!(search_locators(&mut index, "User"), ["1"]);
    assert!(search_locators(&mut index, "printf").contains(&"3/printf".to_string()));
    assert!(search_locators(&mut index, "Help").contains(&"7/Help-index".to_string()));
}

#[test]
fn test_cache_identity_and_single_load() {
    let dir = corpus();
    let storage = Instrumented::default();
    let tree = DocumentTree::with_storage(layout(dir.path()), &storage);
    let mut index = DocumentIndex::new(tree);

    let printf = index
        .index_from_locator(&Locator::parse("3/printf").unwrap())
        .unwrap();
    let first = index.search_text(printf).unwrap();
    let second = index.search_text(printf).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(storage.loads.get(), 1);
    assert!(index.matches(printf, "CONVERSION"));
    assert_eq!(storage.loads.get(), 1);
    assert_eq!(index.cache().len(), 1);
}

#[test]
fn test_nodes_without_documents_have_no_text() {
    let dir = corpus();
    let storage = Instrumented::default();
    let mut index = DocumentIndex::new(DocumentTree::with_storage(layout(dir.path()), &storage));

    let s1 = index.index(0, 0, None).unwrap();
    assert!(index.search_text(s1).is_none());
    let apps = index
        .index_from_locator(&Locator::parse("1/Applications").unwrap())
        .unwrap();
    assert!(index.search_text(apps).is_none());
    assert_eq!(storage.loads.get(), 0);
}

#[test]
fn test_matches_degrades_on_read_failure() {
    let dir = corpus();
    let storage = Instrumented::default();
    storage.fail_loads.set(true);
    let mut index = DocumentIndex::new(DocumentTree::with_storage(layout(dir.path()), &storage));

    let greet = index
        .index_from_locator(&Locator::parse("1/greet").unwrap())
        .unwrap();
    assert!(!index.matches(greet, "hello"));
    assert!(index.matches(greet, "GREET"));
    assert!(index.search_text(greet).is_none());
}

#[test]
fn test_open_state_only_for_nodes_with_children() {
    let dir = corpus();
    let mut index = DocumentIndex::open(layout(dir.path()));

    let ls = index
        .index_from_locator(&Locator::parse("1/ls").unwrap())
        .unwrap();
    assert!(!index.set_open(ls, true));
    assert!(!index.is_open(ls));
    assert_eq!(index.icon(ls), IconState::Leaf);

    let apps = index
        .index_from_locator(&Locator::parse("1/Applications").unwrap())
        .unwrap();
    assert!(index.set_open(apps, true));
    assert_eq!(index.icon(apps), IconState::SectionExpanded);
    assert!(index.set_open(apps, false));
    assert_eq!(index.icon(apps), IconState::SectionCollapsed);

    let empty_section = index.index(3, 0, None).unwrap();
    assert!(!index.set_open(empty_section, true));
}

#[test]
fn test_query_gives_same_index_as_locator() {
    let dir = corpus();
    let mut index = DocumentIndex::open(layout(dir.path()));

    let by_query = index.index_from_query(&["3", "printf"]).unwrap();
    let by_locator = index
        .index_from_locator(&Locator::parse("help://man/3/printf").unwrap())
        .unwrap();
    let by_path = index
        .index_from_path(&dir.path().join("man3/printf.md"))
        .unwrap();
    assert_eq!(by_query, by_locator);
    assert_eq!(by_query, by_path);
}
