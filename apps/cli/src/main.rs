//! categorytree CLI — build display-ready category trees from a content API.
//!
//! Fetches category records, orders them by their title numbers, flags the
//! ones to highlight on the home page, and prints the tree as JSON.

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
