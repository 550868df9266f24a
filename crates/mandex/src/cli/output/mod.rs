//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

pub use mandex_highlight::{dim, header, subheader, success, tree_line, warning};
use mandex_index::{DocumentIndex, GridIndex, IconState};
use serde::Serialize;

/// JSON description of a single node.
#[derive(Serialize)]
pub struct JsonPage {
    /// Node name.
    pub name: String,
    /// Owning section number.
    pub section: u8,
    /// Conventional `name(section)` reference.
    pub reference: String,
    /// Canonical locator in bare form.
    pub locator: String,
    /// Canonical locator in URL form.
    pub url: String,
    /// Document file, if the node has one.
    pub path: Option<String>,
}

impl JsonPage {
    /// Describes the node at `index`.
    pub fn new(model: &DocumentIndex, index: GridIndex) -> Self {
        let locator = model.locator_of(index);
        Self {
            name: model.page_name(index).to_string(),
            section: locator.section().get(),
            reference: model.page_and_section(index),
            locator: locator.to_string(),
            url: locator.to_url(),
            path: model.page_path(index).map(|p| p.display().to_string()),
        }
    }
}

/// One row of a listing.
#[derive(Serialize)]
pub struct Entry {
    /// Nesting depth below the listed node.
    pub depth: usize,
    /// Row under the parent.
    pub row: usize,
    /// Node name.
    pub name: String,
    /// Icon label: `page`, `open` or `closed`.
    pub icon: &'static str,
    /// Canonical locator in bare form.
    pub locator: String,
}

/// Lists the children of `parent`, or the sections when `parent` is `None`.
///
/// With `recursive`, every node with children is expanded and its children follow it.
pub fn collect_entries(
    model: &mut DocumentIndex,
    parent: Option<GridIndex>,
    recursive: bool,
) -> Vec<Entry> {
    let mut entries = Vec::new();
    walk(model, parent, 0, recursive, &mut entries);
    entries
}

/// Appends the children of `parent` at `depth`.
fn walk(
    model: &mut DocumentIndex,
    parent: Option<GridIndex>,
    depth: usize,
    recursive: bool,
    out: &mut Vec<Entry>,
) {
    for row in 0..model.row_count(parent) {
        let Some(child) = model.index(row, 0, parent) else {
            continue;
        };
        let descend = recursive && model.set_open(child, true);
        out.push(Entry {
            depth,
            row,
            name: model.display(child).to_string(),
            icon: model.icon(child).label(),
            locator: model.locator_of(child).to_string(),
        });
        if descend {
            walk(model, Some(child), depth + 1, recursive, out);
        }
    }
}

/// Prints a listing as indented text.
pub fn print_entries(entries: &[Entry]) {
    if entries.is_empty() {
        println!("{}", dim("(empty)"));
        return;
    }
    for entry in entries {
        let name = if entry.icon == IconState::Leaf.label() {
            entry.name.clone()
        } else {
            format!("{}/", entry.name)
        };
        println!(
            "{}",
            tree_line(
                entry.depth,
                &format!("{:>3}  {name}  {}", entry.row, dim(&entry.locator))
            )
        );
    }
}

/// Prints a page body exactly as stored.
pub fn print_page(model: &mut DocumentIndex, index: GridIndex) -> ExitCode {
    let Some(body) = model.search_text(index) else {
        eprintln!("error: could not read {}", model.page_and_section(index));
        return ExitCode::FAILURE;
    };
    print!("{}", body.to_text());
    ExitCode::SUCCESS
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}
