//! Implementation of `mandex open`.

use std::process::ExitCode;

use crate::cli::{
    args::OpenCommand,
    context::CommandContext,
    output::{JsonPage, print_json, print_page},
};

/// Resolves a query and prints the page it names.
pub fn run(ctx: &mut CommandContext, cmd: &OpenCommand) -> ExitCode {
    let model = match ctx.index() {
        Ok(model) => model,
        Err(code) => return code,
    };

    let page = match model.index_from_query(&cmd.args) {
        Ok(page) => page,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cmd.json {
        return print_json(&JsonPage::new(model, page));
    }

    if cmd.path {
        let Some(path) = model.page_path(page) else {
            eprintln!("error: {} has no document", model.page_and_section(page));
            return ExitCode::FAILURE;
        };
        println!("{}", path.display());
        return ExitCode::SUCCESS;
    }

    print_page(model, page)
}
