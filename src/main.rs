// src/main.rs

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use go_bundled_provides::{Config, ConfigFile};
use std::io::{self, BufWriter};
use tracing::debug;

fn main() -> Result<()> {
    // stdout carries only Provides lines, so diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let file = match &cli.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };
    let config = Config::resolve(file, cli.overrides());
    debug!("Resolved config: {:?}", config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    go_bundled_provides::generate(&config, &mut out)?;

    Ok(())
}
