//! Riftstats CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use riftstats::cli::{handle_error, Cli, Commands};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Fetch(args) => riftstats::cli::commands::fetch::execute(args).await,
        Commands::Warm(args) => riftstats::cli::commands::warm::execute(args).await,
    };

    if let Err(err) = result {
        handle_error(err);
    }
}
