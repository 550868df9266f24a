//! Tree-view model adapter for mandex.
//!
//! [`DocumentIndex`] exposes a [`mandex_tree::DocumentTree`] through the addressing contract
//! of a hierarchical view: every node is reached by a [`GridIndex`] made of a row, a column
//! and an implied parent. On top of that it provides display labels, icons, expanded state,
//! page bodies through the content cache, and term matching.
//!
//! # Example
//!
//! ```no_run
//! use mandex_index::{DocumentIndex, SearchOptions};
//! use mandex_locator::CorpusLayout;
//!
//! let mut index = DocumentIndex::open(CorpusLayout::new("/usr/share/man", "md"));
//! for hit in index.search("printf", SearchOptions::default()) {
//!     println!("{}  {}", index.page_and_section(hit), index.locator_of(hit));
//! }
//! ```

#![warn(missing_docs)]

mod grid;
mod index;
mod search;

pub use grid::{GridIndex, IconState, SearchOptions};
pub use index::DocumentIndex;
