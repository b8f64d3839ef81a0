//! CLI definitions for AskSG.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use asksg_protocols::SearchMode;

/// AskSG CLI.
#[derive(Parser)]
#[command(name = "asksg")]
#[command(about = "Hybrid keyword and semantic search over the AskSG dataset catalogue")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the HTTP server in foreground (default)
    Serve {
        /// Server host (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Embed the corpus snapshot and write the vector index
    BuildIndex {
        /// Overwrite an existing index snapshot
        #[arg(long)]
        force: bool,
    },

    /// Run a single query and print the ranked collections
    Search {
        /// Question to search for
        query: String,

        /// Ranking mode
        #[arg(long, value_enum, default_value_t = ModeArg::Hybrid)]
        mode: ModeArg,

        /// Embed the query with the remote provider
        #[arg(long)]
        remote: bool,

        /// Output format (table, json)
        #[arg(long, default_value = "table")]
        format: String,
    },
}

/// Ranking mode as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ModeArg {
    Keyword,
    Semantic,
    Hybrid,
}

impl From<ModeArg> for SearchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Keyword => SearchMode::Lexical,
            ModeArg::Semantic => SearchMode::Vector,
            ModeArg::Hybrid => SearchMode::Hybrid,
        }
    }
}
