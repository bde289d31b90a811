use clap::{Parser, Subcommand};

use crate::cli::replay::args::Args;

#[derive(Parser, Debug)]
#[command(name = "cosmos-indexer")]
#[command(about = "CLI tool for Cosmos transfer indexing handlers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replay host-decoded primitives through the handlers
    Replay(Args),
}
