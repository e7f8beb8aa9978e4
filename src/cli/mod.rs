//! Command-line interface for riftstats.

pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "riftstats", version, about = "League of Legends player statistics cache")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve one summoner profile through the cache engine
    Fetch(commands::fetch::FetchArgs),
    /// Prefetch profiles for a list of summoners
    Warm(commands::warm::WarmArgs),
}

/// Print a top-level error and exit non-zero.
pub fn handle_error(err: anyhow::Error) -> ! {
    eprintln!("error: {err:#}");
    std::process::exit(1);
}
