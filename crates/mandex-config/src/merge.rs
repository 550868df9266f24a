//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`, applying precedence
//! rules and resolving paths.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, CorpusSettings, SearchSettings,
    parse::{RawConfig, RawCorpusSettings, RawSearchSettings},
    resolve::resolve_corpus_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Returns the directory containing the config file.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Every setting, including the `exclude` list as a whole, takes the value from the
/// highest-precedence file that defines it. A relative corpus path is resolved against the
/// directory of the file that defines it.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let mut corpus = CorpusSettings::default();
    let mut search = SearchSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref raw) = parsed.config.corpus {
            apply_raw_corpus(&mut corpus, raw, parsed.dir())?;
        }
        if let Some(ref raw) = parsed.config.search {
            apply_raw_search(&mut search, raw);
        }
    }

    let config_root = configs.first().map(|c| c.dir().to_path_buf());

    Ok(Config {
        corpus,
        search,
        config_root,
    })
}

/// Applies raw corpus settings to result, overwriting any present values.
fn apply_raw_corpus(
    result: &mut CorpusSettings,
    raw: &RawCorpusSettings,
    config_dir: &Path,
) -> Result<(), ConfigError> {
    if let Some(ref v) = raw.path {
        result.path = resolve_corpus_path(v, config_dir)?;
    }
    if let Some(ref v) = raw.extension {
        result.extension = v.clone();
    }
    if let Some(ref v) = raw.index_page {
        result.index_page = v.clone();
    }
    if let Some(ref v) = raw.exclude {
        result.exclude = v.clone();
    }
    Ok(())
}

/// Applies raw search settings to result.
fn apply_raw_search(result: &mut SearchSettings, raw: &RawSearchSettings) {
    if let Some(v) = raw.names_only {
        result.names_only = v;
    }
    if let Some(v) = raw.limit {
        result.limit = v;
    }
}
