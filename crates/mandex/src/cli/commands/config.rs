//! Implementation of `mandex config`.

use std::process::ExitCode;

use mandex_config::{discover_config_files, format_path_for_display};
use mandex_highlight::Highlighter;

use crate::cli::{context::CommandContext, output::dim};

/// Shows the effective settings and the files they were merged from.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let files = discover_config_files(&ctx.cwd);
    if files.is_empty() {
        println!("{}", dim("# built-in defaults"));
    }
    for path in &files {
        let display = format_path_for_display(path, Some(&ctx.cwd));
        println!("{}", dim(&format!("# from {display}")));
    }

    let highlighter = Highlighter::new();
    print!("{}", highlighter.highlight_toml(&ctx.config.settings_to_toml()));
    ExitCode::SUCCESS
}
