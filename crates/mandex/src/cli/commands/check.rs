//! Implementation of `mandex check`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use mandex_config::{ConfigWarning, count_documents, discover_config_files, format_path_for_display};
use mandex_locator::SectionNumber;
use mandex_tree::section_info;

use crate::cli::{
    context::CommandContext,
    output::{dim, subheader, warning},
};

/// Shows configuration files, the corpus layout, and validation warnings.
pub fn run(ctx: &mut CommandContext) -> ExitCode {
    let cwd = ctx.cwd.clone();
    let config = ctx.config.clone();

    let config_files = discover_config_files(&cwd);
    println!("{}", subheader("Config files:"));
    if config_files.is_empty() {
        println!("   {}", dim("(none, using defaults)"));
    }
    for path in &config_files {
        println!("   {}", format_path_for_display(path, Some(&cwd)));
    }
    println!();

    let layout = config.layout();
    let base = config.config_root.as_deref();
    println!("{}", subheader("Corpus:"));
    println!(
        "   {} {}",
        format_path_for_display(layout.root(), base),
        dim(&format!("(*.{})", layout.extension()))
    );
    println!();

    if layout.root().is_dir() {
        let model = match ctx.index() {
            Ok(model) => model,
            Err(code) => return code,
        };

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec!["Section", "Title", "Directory", "Entries"]);
        for section in SectionNumber::all() {
            let dir = layout.section_dir(section);
            let entries = model
                .index(section.index(), 0, None)
                .map_or(0, |index| model.row_count(Some(index)));
            let status = if dir.is_dir() {
                format_path_for_display(&dir, Some(layout.root()))
            } else {
                warning("missing")
            };
            table.add_row(vec![
                Cell::new(section.get()),
                Cell::new(section_info(section).title),
                Cell::new(status),
                Cell::new(entries),
            ]);
        }
        println!("{table}");
        println!(
            "   {}",
            dim(&format!("{} documents", count_documents(&config)))
        );
        println!();
    }

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    let corpus_unusable = warnings.iter().any(|w| {
        matches!(
            w,
            ConfigWarning::CorpusMissing { .. } | ConfigWarning::CorpusNotDirectory { .. }
        )
    });
    let sections_missing = warnings
        .iter()
        .any(|w| matches!(w, ConfigWarning::SectionMissing { .. }));

    if corpus_unusable {
        println!(
            "{}",
            dim("Hint: set [corpus] path in .mandex.toml, or pass --root")
        );
    }
    if sections_missing {
        println!("{}", dim("Hint: create the missing man<N> directories"));
    }
}
