//! The fixed registry of top-level manual sections.

use mandex_locator::{SECTION_COUNT, SectionNumber};

/// Static description of one top-level section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionInfo {
    /// Section number, 1-8.
    pub number: u8,
    /// Human-readable title without the number.
    pub title: &'static str,
}

impl SectionInfo {
    /// Returns the validated section number.
    pub fn section(&self) -> SectionNumber {
        SectionNumber::new(u64::from(self.number)).expect("registry numbers are in range")
    }

    /// Returns the display name, e.g. `6 - Games`.
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.number, self.title)
    }
}

/// All top-level sections in ascending order.
pub const SECTIONS: [SectionInfo; SECTION_COUNT as usize] = [
    SectionInfo {
        number: 1,
        title: "User Programs",
    },
    SectionInfo {
        number: 2,
        title: "System Calls",
    },
    SectionInfo {
        number: 3,
        title: "Library Functions",
    },
    SectionInfo {
        number: 4,
        title: "Special Files",
    },
    SectionInfo {
        number: 5,
        title: "File Formats",
    },
    SectionInfo {
        number: 6,
        title: "Games",
    },
    SectionInfo {
        number: 7,
        title: "Miscellanea",
    },
    SectionInfo {
        number: 8,
        title: "Sysadmin Tools",
    },
];

/// Returns the registry entry for a section.
pub fn section_info(section: SectionNumber) -> &'static SectionInfo {
    &SECTIONS[section.index()]
}
