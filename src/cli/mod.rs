use std::io::IsTerminal;
use std::net::SocketAddr;

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser};

use crate::models::{SearchConfig, SearchRequest, SEARCH_RESULT_VERSION};
use crate::search::engine;
use crate::server::{self, AppState};
use crate::view::SearchForm;

mod args;
mod config;
mod format;
mod http_backend;
mod interactive;

pub use args::{
    dataset_or_default, Cli, Commands, InteractiveArgs, OutputFormat, SearchArgs, ServeArgs,
    DEFAULT_ADDR, DEFAULT_TITLE,
};
pub use interactive::run_loop;

use config::{
    apply_interactive_config_defaults, apply_search_config_defaults, apply_serve_config_defaults,
    load_cli_config,
};
use http_backend::HttpSearchBackend;

/// Entry point for the CLI binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.schema_version {
        println!(
            "Search result JSON schema version: {}",
            SEARCH_RESULT_VERSION
        );
        return Ok(());
    }

    let cli_config = load_cli_config()?;

    match cli.command {
        Some(Commands::Search(mut search_args)) => {
            if let Some(ref config) = cli_config {
                apply_search_config_defaults(config, &mut search_args);
            }

            let form = SearchForm {
                query: search_args.query.clone(),
                submitted: true,
            };
            let Some(query) = form.submitted_query() else {
                tracing::debug!("no query given; nothing to search");
                return Ok(());
            };

            let result = if let Some(server_url) = effective_server_url(
                search_args.server.as_deref(),
                search_args.no_server,
            ) {
                let backend = HttpSearchBackend::new(server_url)?;
                backend.search(&SearchRequest {
                    query: Some(query.to_string()),
                })?
            } else {
                let config = SearchConfig {
                    query: Some(query.to_string()),
                    dataset: dataset_or_default(search_args.dataset.clone()),
                };
                engine::run_search(&config)
                    .map_err(|err| anyhow!(crate::view::error_message(&err)))?
            };

            match search_args.format {
                OutputFormat::Text => format::print_text(&result),
                OutputFormat::Table => format::print_table(&result),
                OutputFormat::Json => {
                    serde_json::to_writer(std::io::stdout(), &result)?;
                    println!();
                    Ok(())
                }
            }
        }
        Some(Commands::Interactive(mut interactive_args)) => {
            if let Some(ref config) = cli_config {
                apply_interactive_config_defaults(config, &mut interactive_args);
            }

            let dataset = dataset_or_default(interactive_args.dataset);
            let stdin = std::io::stdin();
            let prompt = stdin.is_terminal();
            let mut stdout = std::io::stdout();
            interactive::run_loop(stdin.lock(), &mut stdout, &dataset, prompt)
        }
        Some(Commands::Serve(mut serve_args)) => {
            if let Some(ref config) = cli_config {
                apply_serve_config_defaults(config, &mut serve_args);
            }

            let addr: SocketAddr = serve_args.addr.parse()?;
            let state = AppState {
                dataset: dataset_or_default(serve_args.dataset),
                title: serve_args
                    .title
                    .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            };
            println!("Starting tocsearch HTTP server on http://{addr}");

            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;

            runtime.block_on(server::run(addr, state))?;
            Ok(())
        }
        None => {
            let mut cmd = Cli::command();
            cmd.print_help()?;
            println!();
            Ok(())
        }
    }
}

fn effective_server_url(server_flag: Option<&str>, no_server: bool) -> Option<String> {
    if no_server {
        None
    } else {
        server_flag.map(|s| s.to_string())
    }
}
