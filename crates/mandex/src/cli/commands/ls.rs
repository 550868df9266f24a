//! Implementation of `mandex ls`.

use std::process::ExitCode;

use mandex_locator::Locator;

use crate::cli::{
    args::LsCommand,
    context::CommandContext,
    output::{collect_entries, print_entries, print_json},
};

/// Lists the sections, or the children of a node.
pub fn run(ctx: &mut CommandContext, cmd: &LsCommand) -> ExitCode {
    let locator = match cmd.locator.as_deref().map(Locator::parse).transpose() {
        Ok(locator) => locator,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let model = match ctx.index() {
        Ok(model) => model,
        Err(code) => return code,
    };

    let parent = match locator.map(|l| model.index_from_locator(&l)).transpose() {
        Ok(parent) => parent,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let entries = collect_entries(model, parent, cmd.recursive);
    model.dump();

    if cmd.json {
        return print_json(&entries);
    }
    print_entries(&entries);
    ExitCode::SUCCESS
}
