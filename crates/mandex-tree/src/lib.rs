//! Lazy document tree for mandex.
//!
//! This crate models a manual corpus as a tree:
//! - Eight fixed top-level sections, created up front
//! - Subsections and pages below them, discovered on first access through [`Storage`]
//! - A [`ContentCache`] that maps each page body once and shares it afterwards
//! - Resolvers that turn locators and command-line queries into nodes
//!
//! # Example
//!
//! ```no_run
//! use mandex_locator::CorpusLayout;
//! use mandex_tree::DocumentTree;
//!
//! let mut tree = DocumentTree::open(CorpusLayout::new("/usr/share/man", "md"));
//! let page = tree.resolve_args(&["3", "printf"]).unwrap();
//! println!("{}", tree.locator(page));
//! ```

#![warn(missing_docs)]

mod cache;
mod content;
mod error;
mod node;
mod resolve;
mod section;
mod storage;
mod tree;

pub use cache::ContentCache;
pub use content::PageContent;
pub use error::TreeError;
pub use mandex_locator::{CorpusLayout, Locator, LocatorError, Query, SectionNumber};
pub use node::{Node, NodeId, NodeKind};
pub use resolve::Resolved;
pub use section::{SECTIONS, SectionInfo, section_info};
pub use storage::{FsStorage, Storage, StorageEntry};
pub use tree::DocumentTree;
