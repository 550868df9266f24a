//! Locating `.mandex.toml` files.
//!
//! Every ancestor of the working directory may hold one. The chain is cut at the first file
//! that sets `root = true`; otherwise `~/.mandex.toml` is consulted last.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".mandex.toml";

/// Returns the configuration files that apply in `cwd`, closest first.
///
/// The global file comes last, unless a `root = true` file ended the walk or the global
/// file was already reached as an ancestor.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let (mut files, sealed) = ancestor_configs(cwd);
    if sealed {
        return files;
    }
    if let Some(global) = global_config_path().filter(|p| p.is_file() && !files.contains(p)) {
        files.push(global);
    }
    files
}

/// Collects config files from `cwd` upwards; the flag is set if a root file ended the walk.
fn ancestor_configs(cwd: &Path) -> (Vec<PathBuf>, bool) {
    let mut files = Vec::new();
    for candidate in cwd.ancestors().map(|dir| dir.join(CONFIG_FILENAME)) {
        if !candidate.is_file() {
            continue;
        }
        let sealed = is_root_config(&candidate);
        files.push(candidate);
        if sealed {
            return (files, true);
        }
    }
    (files, false)
}

/// Returns `~/.mandex.toml`, or `None` without a home directory.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Returns true if `path` is `~/.mandex.toml`.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}
