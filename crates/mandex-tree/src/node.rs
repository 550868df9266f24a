//! Node structures for the document tree.
//!
//! Nodes live in an arena owned by [`DocumentTree`](crate::DocumentTree) and refer to each
//! other by [`NodeId`]. Ownership runs strictly from the arena to its nodes; a node's
//! `parent` is a plain index, never a shared handle.

use mandex_locator::SectionNumber;

/// Handle to a node inside one document tree.
///
/// Ids are only meaningful for the tree that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Wraps an arena slot.
    pub(crate) fn new(slot: usize) -> Self {
        Self(slot)
    }

    /// Returns the arena slot of this node.
    pub fn slot(self) -> usize {
        self.0
    }
}

/// Distinguishes the three kinds of node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// One of the eight numbered top-level sections.
    Section(SectionNumber),
    /// A named directory below a section or another subsection.
    Subsection {
        /// Whether a sibling document with the same title belongs to this subsection.
        has_document: bool,
    },
    /// A leaf document.
    Page,
}

/// Child list of a node, discovered at most once.
#[derive(Debug, Clone, Default)]
pub(crate) enum Children {
    /// Storage has not been listed yet.
    #[default]
    Unreified,
    /// Storage was listed; this list never changes afterwards.
    Reified(Vec<NodeId>),
}

/// A node in the document tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// What kind of node this is.
    pub(crate) kind: NodeKind,
    /// Display label: the section display name, or the file or directory title.
    pub(crate) name: String,
    /// Enclosing node; `None` for sections.
    pub(crate) parent: Option<NodeId>,
    /// Lazily discovered children.
    pub(crate) children: Children,
    /// Expanded/collapsed state as seen by a tree view.
    pub(crate) is_open: bool,
}

impl Node {
    /// Creates a node with no children discovered yet.
    pub(crate) fn new(kind: NodeKind, name: String, parent: Option<NodeId>) -> Self {
        let children = match kind {
            NodeKind::Page => Children::Reified(Vec::new()),
            NodeKind::Section(_) | NodeKind::Subsection { .. } => Children::Unreified,
        };
        Self {
            kind,
            name,
            parent,
            children,
            is_open: false,
        }
    }

    /// Returns the node kind.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns the display label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the enclosing node, or `None` for a section.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns true if the children of this node have been discovered.
    ///
    /// Pages are always reified.
    pub fn is_reified(&self) -> bool {
        matches!(self.children, Children::Reified(_))
    }

    /// Returns the discovered children, or `None` if discovery has not happened yet.
    pub fn reified_children(&self) -> Option<&[NodeId]> {
        match &self.children {
            Children::Reified(children) => Some(children),
            Children::Unreified => None,
        }
    }

    /// Returns the expanded/collapsed state.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Returns true if this node is a page.
    pub fn is_page(&self) -> bool {
        self.kind == NodeKind::Page
    }

    /// Returns true if this node is a top-level section.
    pub fn is_section(&self) -> bool {
        matches!(self.kind, NodeKind::Section(_))
    }

    /// Returns true if this node carries a document: a page, or a subsection merged with a
    /// same-named file.
    pub fn has_document(&self) -> bool {
        match self.kind {
            NodeKind::Page => true,
            NodeKind::Subsection { has_document } => has_document,
            NodeKind::Section(_) => false,
        }
    }
}
