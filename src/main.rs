use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wayfinder::demo::config::DemoConfig;
use wayfinder::demo::{run, RunOptions};

/// Terminal demo for the wayfinder navigation runtime.
#[derive(Debug, Parser)]
#[command(name = "wayfinder", version, about)]
struct Cli {
    /// Path to config.toml (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the UI tick interval in milliseconds.
    #[arg(long)]
    tick_rate_ms: Option<u64>,

    /// Restore the navigation stack persisted by the previous run.
    #[arg(long)]
    restore: bool,

    /// Write logs to this file (the TUI owns the terminal, so there is no
    /// console logging).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("failed to create log file '{}'", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    }

    let config_path = cli.config.unwrap_or_else(DemoConfig::config_path);
    let mut config = DemoConfig::load_from(&config_path)?;
    if let Some(tick_rate_ms) = cli.tick_rate_ms {
        config.tick_rate_ms = tick_rate_ms;
        config.validate()?;
    }

    run(RunOptions {
        config,
        restore: cli.restore,
    })
}
