//! AjiMemo CLI - account client for the AjiMemo memory API.

mod api;
mod cli;
mod commands;
mod local;
mod pages;
mod types;
mod ui;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Controlled by RUST_LOG; logs go to stderr so command output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = cli.context();
    cli.command.execute(&ctx).await
}
