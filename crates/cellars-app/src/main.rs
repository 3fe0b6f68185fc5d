//! # Cellars - Creature registry CLI
//!
//! Usage:
//!   cellars create --type beast --walk 30 --ac-base 10 --ac-bonus 2 --hp 15
//!   cellars create-standard
//!   cellars show <id>
//!   cellars list
//!   cellars delete <id>
//!   cellars token --count 5    (or -n 5)
//!
//! Storage, id generation and the default log filter come from the JSON file
//! passed with `--config`; see `config::AppConfig` for the keys.

mod commands;
mod config;
mod wiring;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::commands::Command;
use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "cellars")]
#[command(about = "Cellars & Centaurs - creature registry")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to a JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    init_logging(&config.log_filter);
    tracing::debug!(?config, "Loaded configuration");

    let app = wiring::build(&config);
    cli.command.run(&app)
}
