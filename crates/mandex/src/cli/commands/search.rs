//! Implementation of `mandex search`.

use std::process::ExitCode;

use mandex_index::SearchOptions;

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{JsonPage, dim, print_json},
};

/// Searches node names and page bodies for a term.
pub fn run(ctx: &mut CommandContext, cmd: &SearchCommand) -> ExitCode {
    let options = SearchOptions {
        names_only: cmd.names_only || ctx.config.search.names_only,
        limit: cmd.limit.or_else(|| ctx.config.search_limit()),
    };

    let model = match ctx.index() {
        Ok(model) => model,
        Err(code) => return code,
    };

    let hits = model.search(&cmd.term, options);

    if cmd.json {
        let pages: Vec<JsonPage> = hits.iter().map(|hit| JsonPage::new(model, *hit)).collect();
        return print_json(&pages);
    }

    if hits.is_empty() {
        println!("{}", dim("No results found."));
        return ExitCode::SUCCESS;
    }

    for hit in hits {
        println!(
            "{}  {}",
            model.page_and_section(hit),
            dim(&model.locator_of(hit).to_string())
        );
    }
    ExitCode::SUCCESS
}
