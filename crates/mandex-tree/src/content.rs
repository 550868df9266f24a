//! Page content buffers.

use std::{borrow::Cow, fmt, fs::File, io, ops::Deref};

use memmap2::Mmap;

/// Backing storage of a page's bytes.
enum Repr {
    /// A read-only memory map of the page file.
    Mapped(Mmap),
    /// Bytes held on the heap (empty files, test storage).
    Owned(Vec<u8>),
}

/// The raw bytes of a page document.
///
/// Content is usually memory-mapped from the page file. Zero-length files cannot be mapped
/// portably, so they are represented as empty owned buffers instead.
pub struct PageContent {
    /// Where the bytes live.
    repr: Repr,
}

impl PageContent {
    /// Creates empty content.
    pub fn empty() -> Self {
        Self::from_bytes(Vec::new())
    }

    /// Creates content from owned bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            repr: Repr::Owned(bytes.into()),
        }
    }

    /// Maps a file read-only.
    pub fn map(file: &File) -> io::Result<Self> {
        if file.metadata()?.len() == 0 {
            return Ok(Self::empty());
        }
        // SAFETY: the corpus is static for the lifetime of an index; pages are never
        // truncated or rewritten while mapped.
        let mmap = unsafe { Mmap::map(file)? };
        Ok(Self {
            repr: Repr::Mapped(mmap),
        })
    }

    /// Returns true if the content is backed by a memory map.
    pub fn is_mapped(&self) -> bool {
        matches!(self.repr, Repr::Mapped(_))
    }

    /// Returns the content as text, replacing invalid UTF-8 sequences.
    pub fn to_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self)
    }

    /// Returns true if the content contains `term`, ignoring case.
    ///
    /// An empty term matches everything.
    pub fn contains_ignore_case(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        self.to_text().to_lowercase().contains(&term.to_lowercase())
    }
}

impl Deref for PageContent {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match &self.repr {
            Repr::Mapped(mmap) => &mmap[..],
            Repr::Owned(bytes) => bytes.as_slice(),
        }
    }
}

impl AsRef<[u8]> for PageContent {
    fn as_ref(&self) -> &[u8] {
        self
    }
}

impl fmt::Debug for PageContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageContent")
            .field("mapped", &self.is_mapped())
            .field("len", &self.len())
            .finish()
    }
}
