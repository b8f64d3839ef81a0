//! AskSG - hybrid search over the dataset catalogue
//!
//! Main entry point for the AskSG CLI and server.

mod cli;
mod cmd_index;
mod cmd_search;
mod components;
mod server;

#[cfg(test)]
mod test_support;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::components::load_config;
use crate::server::{init_tracing, run_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with file and console output
    init_tracing()?;

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    match cli.command {
        None => run_server(config, None, None).await,
        Some(Commands::Serve { host, port }) => run_server(config, host, port).await,
        Some(Commands::BuildIndex { force }) => cmd_index::build_index(&config, force).await,
        Some(Commands::Search {
            query,
            mode,
            remote,
            format,
        }) => cmd_search::run_search(&config, &query, mode.into(), remote, &format).await,
    }
}
