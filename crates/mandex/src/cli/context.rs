//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use mandex_config::{Config, ConfigError, resolve_corpus_path};
use mandex_index::DocumentIndex;
use mandex_tree::DocumentTree;
use tracing::debug;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
    /// Document index opened for this invocation.
    index: Option<DocumentIndex>,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    ///
    /// `root` replaces the configured corpus path; relative paths resolve against the
    /// current directory.
    pub fn load(root: Option<&Path>) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let mut config = load_config_or_failure(&cwd)?;
        if let Some(root) = root {
            config.corpus.path = resolve_corpus_path(&root.to_string_lossy(), &cwd).map_err(|e| {
                eprintln!("error: invalid --root: {e}");
                ExitCode::FAILURE
            })?;
        }
        Ok(Self {
            cwd,
            config,
            index: None,
        })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used by `init`, which must work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
            index: None,
        })
    }

    /// Returns the document index, opening it on first use.
    pub fn index(&mut self) -> Result<&mut DocumentIndex, ExitCode> {
        if self.index.is_some() {
            return Ok(self.index.as_mut().expect("index checked"));
        }

        let index = open_index_or_failure(&self.config)?;
        self.index = Some(index);
        Ok(self.index.as_mut().expect("index just set"))
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}

/// Builds the index described by the configuration.
///
/// Nothing is read from the corpus here; sections are listed when first needed.
fn open_index_or_failure(config: &Config) -> Result<DocumentIndex, ExitCode> {
    let invalid = |e: ConfigError| {
        eprintln!("error: invalid configuration: {e}");
        ExitCode::FAILURE
    };
    let exclude = config.compile_exclude().map_err(invalid)?;
    let index_page = config.index_page().map_err(invalid)?;

    debug!(root = %config.corpus.path.display(), "opening corpus");
    let tree = DocumentTree::open(config.layout())
        .with_exclude(exclude)
        .with_index_page(index_page);
    Ok(DocumentIndex::new(tree))
}
