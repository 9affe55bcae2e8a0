//! tmlsetup entry point.

mod app;
mod cli;
mod config;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tmlsetup_steam::{DirectoryResolver, FsProbe, ProcessEnv};

fn main() -> anyhow::Result<()> {
    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting tmlsetup");

    if !cfg!(target_os = "linux") {
        anyhow::bail!("only the Linux Steam layout is supported on this platform");
    }

    let config = match cli.config.clone().or_else(|| config::default_config_path(&ProcessEnv)) {
        Some(path) => config::Config::load_from(&path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => config::Config::default(),
    };

    let resolver = DirectoryResolver::linux(ProcessEnv, FsProbe);
    app::run(&cli, &config, &ProcessEnv, &resolver)
}
