use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{Cli, Config};

mod config;
mod render;
mod tui;

fn main() -> anyhow::Result<()> {
    let config = Config::from(Cli::parse());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    info!(?config, "starting console game");
    tui::run(&config)
}
