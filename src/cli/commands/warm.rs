//! `riftstats warm` - prefetch profiles for a list of summoners.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use crate::domain::models::{CacheKey, QueueFilter};
use crate::infrastructure::config::ConfigLoader;

/// Parallel resolves across distinct keys; the orchestrator serializes per
/// key, so this only overlaps work for different summoners.
const WARM_CONCURRENCY: usize = 4;

#[derive(Args)]
pub struct WarmArgs {
    /// Platform identifier, e.g. euw1
    pub server: String,

    /// File with one summoner name per line; blank lines and `#` comments
    /// are skipped
    #[arg(long)]
    pub file: PathBuf,

    /// Number of matches to cache per summoner
    #[arg(long, default_value_t = 10)]
    pub games: usize,
}

pub async fn execute(args: WarmArgs) -> Result<()> {
    let config = ConfigLoader::load()?;
    let orchestrator = super::build_orchestrator(&config).await?;

    let list = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let names: Vec<String> = list
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect();

    let results: Vec<bool> = stream::iter(names)
        .map(|name| {
            let key = CacheKey::new(&args.server, &name);
            let orchestrator = &orchestrator;
            async move {
                match orchestrator.resolve(&key, args.games, QueueFilter::All).await {
                    Ok(resolution) => {
                        info!(key = %key, outcome = ?resolution.outcome, "warmed");
                        true
                    }
                    // One bad name should not abort the whole warm run.
                    Err(err) => {
                        warn!(key = %key, error = %err, "warm failed");
                        false
                    }
                }
            }
        })
        .buffer_unordered(WARM_CONCURRENCY)
        .collect()
        .await;

    let warmed = results.iter().filter(|ok| **ok).count();
    info!(
        warmed = warmed,
        failed = results.len() - warmed,
        "warm run complete"
    );
    Ok(())
}
