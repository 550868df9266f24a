//! Section numbers.

use std::{fmt, str::FromStr};

use crate::LocatorError;

/// Number of top-level manual sections.
pub const SECTION_COUNT: u8 = 8;

/// A validated top-level section number in `1..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionNumber(u8);

impl SectionNumber {
    /// Validates a section number.
    pub fn new(number: u64) -> Result<Self, LocatorError> {
        match u8::try_from(number) {
            Ok(n) if (1..=SECTION_COUNT).contains(&n) => Ok(Self(n)),
            _ => Err(LocatorError::SectionOutOfRange {
                number,
                max: SECTION_COUNT,
            }),
        }
    }

    /// Parses a section number from its decimal text.
    ///
    /// Only ASCII digits are accepted. Digit strings too long for a `u64` are reported as out
    /// of range rather than malformed, since they are still numbers.
    pub fn parse(text: &str) -> Result<Self, LocatorError> {
        if text.is_empty() {
            return Err(LocatorError::malformed(text, "missing section number"));
        }
        if !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LocatorError::malformed(text, "section is not a number"));
        }
        let number = text.parse::<u64>().unwrap_or(u64::MAX);
        Self::new(number)
    }

    /// Returns the section number.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the zero-based position of this section in the section registry.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Returns the section at a zero-based registry position, if there is one.
    pub fn from_index(index: usize) -> Option<Self> {
        index
            .checked_add(1)
            .and_then(|n| u8::try_from(n).ok())
            .filter(|n| *n <= SECTION_COUNT)
            .map(Self)
    }

    /// Iterates over all sections in ascending order.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> {
        (1..=SECTION_COUNT).map(Self)
    }
}

impl fmt::Display for SectionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SectionNumber {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
