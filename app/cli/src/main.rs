mod cli {
    pub mod replay {
        pub mod args;
        pub mod read;
        pub mod run;
    }
    pub mod cmd;
}

use clap::Parser;
use eyre::Result;

use crate::cli::cmd::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // install global subscriber configured based on RUST_LOG envvar.
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match &cli.command {
        Command::Replay(args) => {
            tracing::info!("Replay Command: {:?}", args);
            cli::replay::run::replay(args).await
        }
    }
}
