//! Implementation of `mandex get`.

use std::process::ExitCode;

use mandex_locator::Locator;

use crate::cli::{
    args::GetCommand,
    context::CommandContext,
    output::{collect_entries, header, print_entries, print_page},
};

/// Resolves a locator; prints a page body, or lists a section or subsection.
pub fn run(ctx: &mut CommandContext, cmd: &GetCommand) -> ExitCode {
    let locator = match Locator::parse(&cmd.locator) {
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

    let target = match model.index_from_locator(&locator) {
        Ok(target) => target,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if model.tree().node(target.node).is_page() {
        return print_page(model, target);
    }

    println!("{}", header(model.display(target)));
    let entries = collect_entries(model, Some(target), false);
    print_entries(&entries);
    ExitCode::SUCCESS
}
