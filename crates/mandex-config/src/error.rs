//! Configuration errors.

use std::{io, path::PathBuf};

use mandex_locator::LocatorError;
use thiserror::Error;
use toml::de;

/// Why a configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A discovered `.mandex.toml` could not be read.
    #[error("cannot read {path}: {source}")]
    ReadFile {
        /// The file.
        path: PathBuf,
        /// I/O failure.
        source: io::Error,
    },

    /// A `.mandex.toml` is not valid TOML or has unknown keys.
    #[error("{path} is not a valid mandex config: {source}")]
    ParseToml {
        /// The file.
        path: PathBuf,
        /// Parser diagnostic.
        source: de::Error,
    },

    /// An `exclude` entry is not a valid glob.
    #[error("bad exclude pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The entry as written.
        pattern: String,
        /// Glob compiler diagnostic.
        source: globset::Error,
    },

    /// `corpus.index_page` is not a locator.
    #[error("corpus.index_page '{value}' is not a locator: {source}")]
    InvalidIndexPage {
        /// The entry as written.
        value: String,
        /// Locator parse failure.
        source: LocatorError,
    },

    /// A `~` path was configured but the home directory is unknown.
    #[error("cannot expand '~': no home directory")]
    NoHomeDirectory,
}
