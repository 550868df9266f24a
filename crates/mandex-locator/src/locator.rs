//! Canonical locators.
//!
//! A locator addresses a node by section number and a path of names, e.g. `3/printf` or
//! `1/Applications/Browser`. The same locator can be written as a help URL,
//! `help://man/3/printf`. This type centralizes parsing and formatting so callers never
//! split locator strings by hand.

use std::{fmt, str::FromStr};

use crate::{LocatorError, SectionNumber};

/// URL scheme accepted for the URL form of a locator.
pub const SCHEME: &str = "help";

/// URL authority accepted for the URL form of a locator.
pub const AUTHORITY: &str = "man";

/// Locator of the page shown when a query has no arguments.
pub const DEFAULT_INDEX_PAGE: &str = "7/Help-index";

/// A parsed locator: a section number followed by zero or more name segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator {
    /// Top-level section.
    section: SectionNumber,
    /// Names below the section, outermost first.
    segments: Vec<String>,
}

impl Locator {
    /// Creates a locator from a section and name segments.
    pub fn new(section: SectionNumber, segments: Vec<String>) -> Self {
        Self { section, segments }
    }

    /// Creates a locator that addresses a whole section.
    pub fn section_only(section: SectionNumber) -> Self {
        Self::new(section, Vec::new())
    }

    /// Parses a locator in either the bare (`3/printf`) or URL (`help://man/3/printf`) form.
    ///
    /// A single trailing slash is tolerated. Empty name segments, a missing or non-numeric
    /// section and out-of-range sections are rejected.
    pub fn parse(input: &str) -> Result<Self, LocatorError> {
        let path = match input.split_once("://") {
            Some((scheme, rest)) => Self::strip_authority(scheme, rest)?,
            None => input.strip_prefix('/').unwrap_or(input),
        };
        let path = path.strip_suffix('/').unwrap_or(path);

        let mut parts = path.split('/');
        let section_text = parts.next().unwrap_or_default();
        if section_text.is_empty() {
            return Err(LocatorError::malformed(input, "missing section number"));
        }
        let section = SectionNumber::parse(section_text).map_err(|e| match e {
            LocatorError::MalformedLocator { reason, .. } => LocatorError::malformed(input, reason),
            other => other,
        })?;

        let mut segments = Vec::new();
        for part in parts {
            if part.is_empty() {
                return Err(LocatorError::malformed(input, "empty name segment"));
            }
            segments.push(part.to_string());
        }

        Ok(Self { section, segments })
    }

    /// Validates the scheme and authority of a URL-form locator and returns its path.
    fn strip_authority<'a>(scheme: &str, rest: &'a str) -> Result<&'a str, LocatorError> {
        let (authority, path) = rest.split_once('/').unwrap_or((rest, ""));
        if scheme != SCHEME || authority != AUTHORITY {
            return Err(LocatorError::InvalidAuthority {
                found: format!("{scheme}://{authority}"),
            });
        }
        Ok(path)
    }

    /// Returns the locator of the default index page.
    pub fn default_index_page() -> Self {
        Self::parse(DEFAULT_INDEX_PAGE).expect("default index page locator is valid")
    }

    /// Returns the section this locator starts in.
    pub fn section(&self) -> SectionNumber {
        self.section
    }

    /// Returns the name segments below the section.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns true if this locator addresses a section rather than something inside one.
    pub fn is_section(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the final name segment, if any.
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Returns a new locator with `name` appended.
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self::new(self.section, segments)
    }

    /// Formats the locator as a help URL.
    pub fn to_url(&self) -> String {
        format!("{SCHEME}://{AUTHORITY}/{self}")
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.section)?;
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for Locator {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
