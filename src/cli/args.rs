use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;

use crate::models::DEFAULT_DATASET;

/// Default bind address for `tocsearch serve`.
pub const DEFAULT_ADDR: &str = "127.0.0.1:8501";

/// Default page title for the HTML search page.
pub const DEFAULT_TITLE: &str = "Photo Antiquaria Suchmaschine";

/// Top-level CLI entrypoint for `tocsearch`.
#[derive(Parser, Debug)]
#[command(
    name = "tocsearch",
    about = "Search a spreadsheet table-of-contents index, ignoring case and accents",
    author = "tocsearch developers",
    subcommand_required = false,
    arg_required_else_help = false
)]
pub struct Cli {
    /// Print the JSON schema version used for `--format=json` output
    /// and exit.
    #[arg(long = "schema-version")]
    pub schema_version: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a single search and print the matching rows.
    Search(SearchArgs),
    /// Read queries from stdin, one per line, and print results for each.
    Interactive(InteractiveArgs),
    /// Serve the search page and JSON API over HTTP.
    Serve(ServeArgs),
}

/// Arguments specific to the `search` subcommand.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Free-text query. Matched as a literal substring of any column,
    /// ignoring case and diacritics.
    pub query: Option<String>,

    /// Spreadsheet to search (first sheet, first row as header).
    #[arg(long = "dataset", env = "TOCSEARCH_DATASET")]
    pub dataset: Option<PathBuf>,

    /// Output format (text, table, or json).
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Optional server URL for delegating search to a running
    /// `tocsearch serve`.
    ///
    /// When set (either via this flag or the `TOCSEARCH_SERVER_URL`
    /// environment variable), the query is sent to the server, which
    /// searches its own dataset. Use `--no-server` to force a local
    /// search.
    #[arg(long = "server", env = "TOCSEARCH_SERVER_URL")]
    pub server: Option<String>,

    /// Disable use of any configured server and force local search.
    #[arg(long = "no-server")]
    pub no_server: bool,
}

/// Arguments specific to the `interactive` subcommand.
#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Spreadsheet to search (first sheet, first row as header).
    #[arg(long = "dataset", env = "TOCSEARCH_DATASET")]
    pub dataset: Option<PathBuf>,
}

/// Arguments specific to the `serve` subcommand.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind, e.g. 127.0.0.1:8501.
    #[arg(long = "addr", default_value = DEFAULT_ADDR)]
    pub addr: String,

    /// Spreadsheet to search (first sheet, first row as header).
    #[arg(long = "dataset", env = "TOCSEARCH_DATASET")]
    pub dataset: Option<PathBuf>,

    /// Heading shown on the search page.
    #[arg(long = "title")]
    pub title: Option<String>,
}

/// CLI representation of output format.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Table,
    Json,
}

/// Resolve the dataset path, falling back to the built-in default.
pub fn dataset_or_default(dataset: Option<PathBuf>) -> PathBuf {
    dataset.unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET))
}
