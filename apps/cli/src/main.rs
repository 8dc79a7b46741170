//! ContactKit CLI: bulk contact capture.
//!
//! Collects contacts from manual entry, spreadsheet pastes, and screenshot
//! transcripts, then exports them as vCard files.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
