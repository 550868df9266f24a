//! Locator and query parsing for mandex.
//!
//! A manual corpus is addressed in three ways, and this crate converts between them without
//! touching storage:
//!
//! - **Locators**: `3/printf` or `help://man/3/printf` - a section number followed by names
//! - **Queries**: the zero, one or two free-form arguments accepted on the command line
//! - **Paths**: `<root>/man3/printf.md` - the on-disk layout of the corpus
//!
//! # Example
//!
//! ```
//! use mandex_locator::Locator;
//!
//! let locator: Locator = "help://man/3/printf".parse().unwrap();
//! assert_eq!(locator.section().get(), 3);
//! assert_eq!(locator.segments(), ["printf"]);
//! assert_eq!(locator.to_string(), "3/printf");
//! ```

#![warn(missing_docs)]

mod error;
mod layout;
mod locator;
mod query;
mod section;

pub use error::LocatorError;
pub use layout::{CorpusLayout, DEFAULT_CORPUS_ROOT, DEFAULT_EXTENSION, SECTION_PREFIX};
pub use locator::{AUTHORITY, DEFAULT_INDEX_PAGE, Locator, SCHEME};
pub use query::{MAX_QUERY_ARGS, Query};
pub use section::{SECTION_COUNT, SectionNumber};
