//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use mandex_locator::{Locator, SectionNumber};
use walkdir::WalkDir;

use crate::{Config, ConfigError, patterns::compile_glob};

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The corpus path does not exist.
    CorpusMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The corpus path exists but is not a directory.
    CorpusNotDirectory {
        /// Path that is not a directory.
        path: String,
    },
    /// A section directory is missing from the corpus.
    SectionMissing {
        /// Section number.
        section: u8,
        /// Expected directory.
        path: String,
    },
    /// The corpus contains no documents with the configured extension.
    NoDocuments {
        /// Corpus path.
        path: String,
        /// Configured extension.
        extension: String,
    },
    /// The index page is not a valid locator.
    InvalidIndexPage {
        /// Configured value.
        value: String,
        /// Parse error.
        reason: String,
    },
    /// An exclude glob does not compile.
    InvalidExcludePattern {
        /// The pattern.
        pattern: String,
        /// Compile error.
        reason: String,
    },
    /// The extension is empty or contains a dot.
    InvalidExtension {
        /// Configured extension.
        extension: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CorpusMissing { path } => write!(f, "corpus path does not exist: {path}"),
            Self::CorpusNotDirectory { path } => {
                write!(f, "corpus path is not a directory: {path}")
            }
            Self::SectionMissing { section, path } => {
                write!(f, "section {section} directory is missing: {path}")
            }
            Self::NoDocuments { path, extension } => {
                write!(f, "no .{extension} documents found under {path}")
            }
            Self::InvalidIndexPage { value, reason } => {
                write!(f, "index page '{value}' is not a valid locator: {reason}")
            }
            Self::InvalidExcludePattern { pattern, reason } => {
                write!(f, "exclude pattern '{pattern}' is invalid: {reason}")
            }
            Self::InvalidExtension { extension } => {
                write!(f, "extension '{extension}' must be non-empty and contain no dot")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    let extension = config.corpus.extension.strip_prefix('.').unwrap_or(&config.corpus.extension);
    let extension_ok = !extension.is_empty() && !extension.contains('.');
    if !extension_ok {
        warnings.push(ConfigWarning::InvalidExtension {
            extension: config.corpus.extension.clone(),
        });
    }

    if let Err(e) = Locator::parse(&config.corpus.index_page) {
        warnings.push(ConfigWarning::InvalidIndexPage {
            value: config.corpus.index_page.clone(),
            reason: e.to_string(),
        });
    }

    for pattern in &config.corpus.exclude {
        if let Err(e) = compile_glob(pattern) {
            let reason = match e {
                ConfigError::InvalidPattern { source, .. } => source.kind().to_string(),
                other => other.to_string(),
            };
            warnings.push(ConfigWarning::InvalidExcludePattern {
                pattern: pattern.clone(),
                reason,
            });
        }
    }

    warnings.extend(validate_corpus(config, extension_ok));
    warnings
}

/// Checks the corpus directory and its layout.
fn validate_corpus(config: &Config, extension_ok: bool) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();
    let path = &config.corpus.path;

    if !path.exists() {
        warnings.push(ConfigWarning::CorpusMissing {
            path: path.display().to_string(),
        });
        return warnings;
    }
    if !path.is_dir() {
        warnings.push(ConfigWarning::CorpusNotDirectory {
            path: path.display().to_string(),
        });
        return warnings;
    }

    let layout = config.layout();
    for section in SectionNumber::all() {
        let dir = layout.section_dir(section);
        if !dir.is_dir() {
            warnings.push(ConfigWarning::SectionMissing {
                section: section.get(),
                path: dir.display().to_string(),
            });
        }
    }

    if extension_ok && count_documents(config) == 0 {
        warnings.push(ConfigWarning::NoDocuments {
            path: path.display().to_string(),
            extension: layout.extension().to_string(),
        });
    }

    warnings
}

/// Counts document files anywhere under the corpus root.
pub fn count_documents(config: &Config) -> usize {
    let layout = config.layout();
    WalkDir::new(layout.root())
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .and_then(|name| layout.document_title(name))
                .is_some()
        })
        .count()
}
