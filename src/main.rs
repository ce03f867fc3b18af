use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use addressbook::Config;

/// Contact book assistant: phones, birthdays, and who to congratulate this week.
#[derive(Debug, Parser)]
#[command(name = "addressbook", version, about)]
struct Args {
    /// Snapshot file path (default: .data/addressbook.json)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (default: warn)
    #[arg(long)]
    log_level: Option<String>,

    /// How many days ahead `birthdays` looks (default: 7)
    #[arg(long)]
    window_days: Option<u32>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env()
        .context("reading configuration from the environment")?
        .with_overrides(args.file, args.log_level, args.window_days);

    // Logs go to stderr so they never mix with REPL output.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    addressbook::cli::run(&config)
        .with_context(|| format!("address book at {}", config.data_file.display()))
}
