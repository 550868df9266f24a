//! Starter files written by `mandex init`.
//!
//! The templates under `templates/` are real TOML so they can be parsed in tests; what
//! `init` writes is the same text with every setting commented out.

/// Template for a project `.mandex.toml`.
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Template for `~/.mandex.toml`.
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Returns the project template with its settings commented out.
pub fn local_template() -> String {
    disable_settings(LOCAL_TEMPLATE)
}

/// Returns the global template with its settings commented out.
pub fn global_template() -> String {
    disable_settings(GLOBAL_TEMPLATE)
}

/// Prefixes `# ` to every line that is neither blank nor already a comment.
fn disable_settings(template: &str) -> String {
    template
        .lines()
        .map(|line| {
            if line.is_empty() || line.starts_with('#') {
                format!("{line}\n")
            } else {
                format!("# {line}\n")
            }
        })
        .collect()
}
