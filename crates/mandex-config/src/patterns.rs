//! Exclude pattern compilation.

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::ConfigError;

/// Compiles exclude globs into a single matcher.
///
/// Patterns are matched against bare file and directory names during discovery.
pub fn compile_exclude(patterns: &[String]) -> Result<GlobSet, ConfigError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(compile_glob(pattern)?);
    }
    builder.build().map_err(|e| ConfigError::InvalidPattern {
        pattern: "<combined exclude patterns>".to_string(),
        source: e,
    })
}

/// Compiles a single glob pattern.
pub fn compile_glob(pattern: &str) -> Result<Glob, ConfigError> {
    Glob::new(pattern).map_err(|e| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_empty_exclude_matches_nothing() {
        let set = compile_exclude(&[]).unwrap();
        assert!(set.is_empty());
        assert!(!set.is_match("ls.md"));
    }

    #[test]
    fn test_exclude_matches_names() {
        let set = compile_exclude(&patterns(&["*.draft.md", ".*"])).unwrap();
        assert!(set.is_match("ls.draft.md"));
        assert!(set.is_match(".git"));
        assert!(!set.is_match("ls.md"));
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = compile_exclude(&patterns(&["ok", "[unclosed"])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { ref pattern, .. } if pattern == "[unclosed"));
    }
}
