pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod routes;
pub mod screens;
pub mod ui;

#[cfg(test)]
mod testing;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Main entrypoint of the terminal front end
pub fn run() -> anyhow::Result<()> {
    init_tracing();
    let cli = cli::Cli::parse();
    tracing::debug!("Starting zapflow");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(cli::execute(cli))
}
