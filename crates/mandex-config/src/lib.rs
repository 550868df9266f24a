//! Configuration system for mandex.
//!
//! mandex uses TOML configuration files named `.mandex.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.mandex.toml` files found, then loading `~/.mandex.toml` as the global config with lowest
//! precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod patterns;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
use globset::GlobSet;
use mandex_locator::{CorpusLayout, DEFAULT_CORPUS_ROOT, DEFAULT_EXTENSION, DEFAULT_INDEX_PAGE, Locator};
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawCorpusSettings, RawSearchSettings, parse_config_file, parse_config_str,
};
pub use patterns::compile_exclude;
pub use resolve::{format_path_for_display, resolve_corpus_path};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::{ConfigWarning, count_documents};
use validate::validate_config;

/// Top-level merged configuration for mandex.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.mandex.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Where the corpus lives and how it is laid out.
    pub corpus: CorpusSettings,
    /// Search defaults.
    pub search: SearchSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.mandex.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Returns the corpus layout described by this configuration.
    pub fn layout(&self) -> CorpusLayout {
        CorpusLayout::new(&self.corpus.path, &self.corpus.extension)
    }

    /// Parses the configured index page.
    pub fn index_page(&self) -> Result<Locator, ConfigError> {
        Locator::parse(&self.corpus.index_page).map_err(|source| ConfigError::InvalidIndexPage {
            value: self.corpus.index_page.clone(),
            source,
        })
    }

    /// Compiles the exclude patterns.
    pub fn compile_exclude(&self) -> Result<GlobSet, ConfigError> {
        compile_exclude(&self.corpus.exclude)
    }

    /// Returns the configured result limit, `None` meaning unlimited.
    pub fn search_limit(&self) -> Option<usize> {
        (self.search.limit > 0).then_some(self.search.limit)
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - A corpus path that doesn't exist or isn't a directory
    /// - Missing section directories
    /// - A corpus with no documents
    /// - An unparseable index page, invalid exclude globs, or a malformed extension
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            corpus: &self.corpus,
            search: &self.search,
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// Corpus settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorpusSettings {
    /// Absolute path of the corpus root.
    pub path: PathBuf,
    /// Document file extension, without the dot.
    pub extension: String,
    /// Locator of the page shown for an empty query.
    pub index_page: String,
    /// File and directory names skipped during discovery.
    pub exclude: Vec<String>,
}

impl Default for CorpusSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CORPUS_ROOT),
            extension: String::from(DEFAULT_EXTENSION),
            index_page: String::from(DEFAULT_INDEX_PAGE),
            exclude: Vec::new(),
        }
    }
}

/// Search-related settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Match page names only, never bodies.
    pub names_only: bool,
    /// Maximum results; zero means unlimited.
    pub limit: usize,
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Corpus settings.
    corpus: &'a CorpusSettings,
    /// Search settings.
    search: &'a SearchSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_defaults() {
        let corpus = CorpusSettings::default();
        assert_eq!(corpus.path, PathBuf::from("/usr/share/man"));
        assert_eq!(corpus.extension, "md");
        assert_eq!(corpus.index_page, "7/Help-index");
        assert!(corpus.exclude.is_empty());
    }

    #[test]
    fn test_search_defaults() {
        let config = Config::default();
        assert!(!config.search.names_only);
        assert_eq!(config.search_limit(), None);
    }

    #[test]
    fn test_layout_and_index_page() {
        let config = Config::default();
        let layout = config.layout();
        assert_eq!(layout.root(), Path::new("/usr/share/man"));
        assert_eq!(layout.extension(), "md");
        assert_eq!(config.index_page().unwrap().to_string(), "7/Help-index");
    }

    #[test]
    fn test_invalid_index_page() {
        let mut config = Config::default();
        config.corpus.index_page = "Help-index".into();
        assert!(matches!(
            config.index_page(),
            Err(ConfigError::InvalidIndexPage { .. })
        ));
    }

    #[test]
    fn test_settings_to_toml() {
        let mut config = Config::default();
        config.corpus.exclude = vec!["*.draft.md".into()];
        config.search.limit = 7;
        let toml = config.settings_to_toml();

        assert!(toml.contains("[corpus]"));
        assert!(toml.contains("[search]"));
        assert!(toml.contains("extension = \"md\""));
        assert!(toml.contains("limit = 7"));

        let parsed: toml::Value =
            toml::from_str(&toml).expect("settings_to_toml should produce valid TOML");
        assert_eq!(
            parsed["corpus"]["index_page"].as_str(),
            Some("7/Help-index")
        );
        assert_eq!(parsed["corpus"]["exclude"][0].as_str(), Some("*.draft.md"));
    }
}
