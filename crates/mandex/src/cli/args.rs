//! Clap argument definitions for the `mandex` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "mandex")]
#[command(about = "Browse and search a sectioned manual corpus")]
pub struct Cli {
    /// Corpus root, overriding the configured path
    #[arg(long, global = true, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for `mandex open`.
#[derive(Args, Debug, Clone)]
pub struct OpenCommand {
    /// Query: nothing, a page name, a section and page name, or a document path
    pub args: Vec<String>,

    /// Print only the document path
    #[arg(long, conflicts_with = "json")]
    pub path: bool,

    /// Output page metadata as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `mandex get`.
#[derive(Args, Debug, Clone)]
pub struct GetCommand {
    /// Locator, e.g. 3/printf or help://man/3/printf
    pub locator: String,
}

/// Arguments for `mandex ls`.
#[derive(Args, Debug, Clone)]
pub struct LsCommand {
    /// Node to list; the sections when omitted
    pub locator: Option<String>,

    /// Descend into subsections
    #[arg(short = 'r', long)]
    pub recursive: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `mandex search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Case-insensitive search term
    pub term: String,

    /// Match page names only, skipping page bodies
    #[arg(long)]
    pub names_only: bool,

    /// Maximum results to return [default: unlimited]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `mandex init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.mandex.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `mandex` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a man-style query and print the page
    #[command(after_help = "\
QUERY FORMS:
  (no arguments)        The index page
  NAME                  First section containing NAME, in ascending order
  SECTION NAME          NAME directly inside SECTION (1-8)
  /path/to/page.md      A document inside the corpus

EXAMPLES:
  mandex open
  mandex open printf
  mandex open 3 printf
  mandex open --path ls")]
    Open(OpenCommand),

    /// Resolve a locator; print a page or list a section
    Get(GetCommand),

    /// List the children of a node
    Ls(LsCommand),

    /// Search page names and bodies
    Search(SearchCommand),

    /// Initialize mandex configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,

    /// Validate configuration and the corpus layout
    Check,
}

/// Parses CLI arguments, exiting with clap's usage output on error.
pub fn parse_cli() -> Cli {
    Cli::parse()
}
