//! `riftstats fetch` - resolve one profile and print it as JSON.

use anyhow::Result;
use clap::Args;

use crate::domain::models::{CacheKey, QueueFilter};
use crate::infrastructure::config::ConfigLoader;

#[derive(Args)]
pub struct FetchArgs {
    /// Platform identifier, e.g. euw1
    pub server: String,

    /// Summoner display name
    pub summoner: String,

    /// Number of matches to return
    #[arg(long, default_value_t = 10)]
    pub games: usize,

    /// Queue filter for fresh fetches: all, ranked or normal
    #[arg(long, default_value = "all")]
    pub queue: String,
}

pub async fn execute(args: FetchArgs) -> Result<()> {
    let queue: QueueFilter = args.queue.parse().map_err(anyhow::Error::msg)?;
    let config = ConfigLoader::load()?;
    let orchestrator = super::build_orchestrator(&config).await?;

    let key = CacheKey::new(&args.server, &args.summoner);
    let resolution = orchestrator.resolve(&key, args.games, queue).await?;

    eprintln!("cache outcome: {:?}", resolution.outcome);
    println!("{}", serde_json::to_string_pretty(&resolution.profile)?);
    Ok(())
}
