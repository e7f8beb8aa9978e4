//! In-memory ProfileStore for tests and ephemeral deployments.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::errors::DomainResult;
use crate::domain::models::{CacheKey, CachedProfile};
use crate::domain::ports::ProfileStore;

#[derive(Default)]
pub struct InMemoryProfileStore {
    entries: RwLock<HashMap<String, CachedProfile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get(&self, key: &CacheKey) -> DomainResult<Option<CachedProfile>> {
        Ok(self.entries.read().await.get(&key.to_string()).cloned())
    }

    async fn put(&self, key: &CacheKey, profile: &CachedProfile) -> DomainResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), profile.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{MatchRecord, SummonerSnapshot};
    use serde_json::Value;

    fn profile() -> CachedProfile {
        CachedProfile::new(
            SummonerSnapshot {
                alias: "faker".to_string(),
                level: 742,
                profile_icon_id: 6,
                rank: Value::Null,
                masteries: Value::Null,
            },
            vec![MatchRecord::new("KR_1")],
        )
    }

    #[tokio::test]
    async fn round_trips_a_profile() {
        let store = InMemoryProfileStore::new();
        let key = CacheKey::new("kr", "faker");

        assert!(store.get(&key).await.unwrap().is_none());
        store.put(&key, &profile()).await.unwrap();

        let stored = store.get(&key).await.unwrap().unwrap();
        assert_eq!(stored.head_match_id(), Some("KR_1"));
    }

    #[tokio::test]
    async fn put_overwrites_in_place() {
        let store = InMemoryProfileStore::new();
        let key = CacheKey::new("kr", "faker");

        store.put(&key, &profile()).await.unwrap();
        let mut updated = profile();
        updated.games.insert(0, MatchRecord::new("KR_2"));
        store.put(&key, &updated).await.unwrap();

        assert_eq!(store.len().await, 1);
        let stored = store.get(&key).await.unwrap().unwrap();
        assert_eq!(stored.head_match_id(), Some("KR_2"));
    }
}
