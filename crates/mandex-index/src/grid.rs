//! Grid addressing types.

use mandex_tree::NodeId;

/// A `(row, column, parent)` address into the document index.
///
/// The parent is implied by `node`: it is whatever [`DocumentIndex::parent_index`] returns.
/// Indexes are only meaningful for the index that produced them.
///
/// [`DocumentIndex::parent_index`]: crate::DocumentIndex::parent_index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridIndex {
    /// Position among the parent's children, or among the sections.
    pub row: usize,
    /// Always zero; the model has a single column.
    pub column: usize,
    /// The addressed node.
    pub node: NodeId,
}

/// Icon a view shows next to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconState {
    /// A page.
    Leaf,
    /// A section or subsection that is collapsed.
    SectionCollapsed,
    /// A section or subsection that is expanded.
    SectionExpanded,
}

impl IconState {
    /// Returns a short label for text output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Leaf => "page",
            Self::SectionCollapsed => "closed",
            Self::SectionExpanded => "open",
        }
    }
}

/// Options for [`DocumentIndex::search`](crate::DocumentIndex::search).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Match node names only, never page bodies.
    pub names_only: bool,
    /// Stop after this many matches.
    pub limit: Option<usize>,
}
