pub mod fetch;
pub mod warm;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crate::domain::models::Config;
use crate::infrastructure::riot::RiotApiClient;
use crate::infrastructure::store::SqliteProfileStore;
use crate::services::CacheOrchestrator;

/// Wire the production orchestrator: Riot client + SQLite store.
pub(crate) async fn build_orchestrator(
    config: &Config,
) -> Result<CacheOrchestrator<RiotApiClient, SqliteProfileStore>> {
    let source = Arc::new(RiotApiClient::new(&config.riot)?);

    if let Some(parent) = Path::new(&config.database.path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let store = Arc::new(
        SqliteProfileStore::connect(&config.database.path, config.database.max_connections)
            .await?,
    );

    Ok(CacheOrchestrator::new(source, store, &config.cache))
}
