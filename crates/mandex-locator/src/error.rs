//! Error types for locator and query parsing.

use thiserror::Error;

/// Errors produced while parsing locators, section numbers and command-line queries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocatorError {
    /// The locator named a scheme or authority other than `help://man`.
    #[error("invalid locator authority: {found}")]
    InvalidAuthority {
        /// The scheme and authority that were found.
        found: String,
    },

    /// The locator is missing its section segment, has a non-numeric section, or contains
    /// an empty name segment.
    #[error("malformed locator '{input}': {reason}")]
    MalformedLocator {
        /// The input that failed to parse.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// The section number is outside `1..=8`.
    #[error("section number {number} is out of range (expected 1-{max})")]
    SectionOutOfRange {
        /// The number that was given.
        number: u64,
        /// Highest valid section number.
        max: u8,
    },

    /// More than two command-line arguments were supplied.
    #[error("queries longer than 2 arguments are not supported (got {count})")]
    QueryTooLong {
        /// Number of arguments that were supplied.
        count: usize,
    },
}

impl LocatorError {
    /// Creates a `MalformedLocator` error for the given input.
    pub(crate) fn malformed(input: &str, reason: &'static str) -> Self {
        Self::MalformedLocator {
            input: input.to_string(),
            reason,
        }
    }
}
