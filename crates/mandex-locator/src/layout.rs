//! On-disk corpus layout.
//!
//! A corpus root holds one directory per section, named `man<N>`. Each of those may contain
//! subdirectories (subsections) and documents with a fixed extension (pages). This module
//! maps between that layout and locators as pure path arithmetic; nothing here touches the
//! filesystem.

use std::path::{Component, Path, PathBuf};

use crate::{Locator, LocatorError, SectionNumber};

/// Prefix of every section directory name (`man1` ... `man8`).
pub const SECTION_PREFIX: &str = "man";

/// Default document extension, without the leading dot.
pub const DEFAULT_EXTENSION: &str = "md";

/// Default corpus root.
pub const DEFAULT_CORPUS_ROOT: &str = "/usr/share/man";

/// Describes where a corpus lives and how its documents are named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusLayout {
    /// Directory containing the `man<N>` section directories.
    root: PathBuf,
    /// Document extension without the leading dot.
    extension: String,
}

impl Default for CorpusLayout {
    fn default() -> Self {
        Self::new(DEFAULT_CORPUS_ROOT, DEFAULT_EXTENSION)
    }
}

impl CorpusLayout {
    /// Creates a layout for a corpus root and document extension.
    ///
    /// A leading dot on the extension is ignored, so `"md"` and `".md"` are equivalent.
    pub fn new(root: impl Into<PathBuf>, extension: impl AsRef<str>) -> Self {
        let extension = extension.as_ref();
        Self {
            root: root.into(),
            extension: extension.strip_prefix('.').unwrap_or(extension).to_string(),
        }
    }

    /// Returns the corpus root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the document extension, without the leading dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Returns the directory of a section: `<root>/man<N>`.
    pub fn section_dir(&self, section: SectionNumber) -> PathBuf {
        self.root.join(format!("{SECTION_PREFIX}{section}"))
    }

    /// Returns the file name of the document titled `title`.
    pub fn document_file_name(&self, title: &str) -> String {
        format!("{title}.{}", self.extension)
    }

    /// Returns the title of a document file name, or `None` if the name does not carry the
    /// document extension (or has nothing before it).
    pub fn document_title<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        file_name
            .strip_suffix(self.extension.as_str())
            .and_then(|stem| stem.strip_suffix('.'))
            .filter(|title| !title.is_empty())
    }

    /// Returns true if `path` is under the corpus root and ends with the document extension.
    ///
    /// This is the precondition of [`CorpusLayout::path_to_locator`].
    pub fn is_corpus_document(&self, path: &Path) -> bool {
        path.starts_with(&self.root)
            && path != self.root
            && path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(|name| self.document_title(name))
                .is_some()
    }

    /// Parses the section number out of a section directory name such as `man3`.
    pub fn section_from_dir_name(name: &str) -> Result<SectionNumber, LocatorError> {
        let Some(number) = name.strip_prefix(SECTION_PREFIX) else {
            return Err(LocatorError::malformed(name, "page is inside an invalid section"));
        };
        SectionNumber::parse(number).map_err(|e| match e {
            LocatorError::MalformedLocator { .. } => {
                LocatorError::malformed(name, "page is inside an invalid section")
            }
            other => other,
        })
    }

    /// Converts a document path into its locator.
    ///
    /// The corpus root and document extension are stripped, and the section directory name
    /// gives the section number: `<root>/man1/Applications/Browser.md` becomes
    /// `1/Applications/Browser`. A path directly inside the root (no section directory)
    /// or with a badly named section directory yields an error.
    ///
    /// # Panics
    ///
    /// Panics if `path` is not under the corpus root or does not end with the document
    /// extension. Check [`CorpusLayout::is_corpus_document`] first when the path is untrusted.
    pub fn path_to_locator(&self, path: &Path) -> Result<Locator, LocatorError> {
        assert!(
            self.is_corpus_document(path),
            "{} is not a document under {}",
            path.display(),
            self.root.display()
        );
        let relative = path
            .strip_prefix(&self.root)
            .expect("document path is under the corpus root");

        let mut names = Vec::new();
        for component in relative.components() {
            let Component::Normal(name) = component else {
                return Err(LocatorError::malformed(
                    &relative.to_string_lossy(),
                    "unexpected path component",
                ));
            };
            let Some(name) = name.to_str() else {
                return Err(LocatorError::malformed(
                    &relative.to_string_lossy(),
                    "path is not valid UTF-8",
                ));
            };
            names.push(name);
        }

        let [section_dir, rest @ .., file_name] = names.as_slice() else {
            return Err(LocatorError::malformed(
                &relative.to_string_lossy(),
                "page is not inside a section directory",
            ));
        };
        let section = Self::section_from_dir_name(section_dir)?;
        let title = self
            .document_title(file_name)
            .expect("precondition checked the extension");

        let mut segments: Vec<String> = rest.iter().map(|s| (*s).to_string()).collect();
        segments.push(title.to_string());
        Ok(Locator::new(section, segments))
    }
}
