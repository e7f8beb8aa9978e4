//! Common test utilities for integration tests
//!
//! Provides a scriptable `MatchSource` mock, a write-counting store wrapper
//! and profile fixtures shared across the integration test files.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use riftstats::domain::errors::{DomainError, DomainResult};
use riftstats::domain::models::{
    CacheKey, CachedProfile, MatchRecord, PlayerIdentity, QueueFilter, SummonerSnapshot,
};
use riftstats::domain::ports::{MatchSource, ProfileStore};
use riftstats::infrastructure::store::InMemoryProfileStore;

pub fn snapshot() -> SummonerSnapshot {
    SummonerSnapshot {
        alias: "faker".to_string(),
        level: 742,
        profile_icon_id: 6,
        rank: Value::Null,
        masteries: Value::Null,
    }
}

pub fn identity() -> PlayerIdentity {
    PlayerIdentity {
        puuid: "puuid-123".to_string(),
        summoner_id: "sum-123".to_string(),
        alias: "faker".to_string(),
        level: 742,
        profile_icon_id: 6,
    }
}

pub fn records(ids: &[&str]) -> Vec<MatchRecord> {
    ids.iter().copied().map(MatchRecord::new).collect()
}

pub fn profile_with_games(ids: &[&str], cached_at: DateTime<Utc>) -> CachedProfile {
    let mut profile = CachedProfile::new(snapshot(), records(ids));
    profile.cached_at = cached_at;
    profile
}

/// Scriptable authoritative source.
///
/// Full fetches return `FRESH_<i>` match ids unless an explicit list is
/// scripted; every operation counts its invocations so tests can assert the
/// exact upstream traffic a resolve produced.
pub struct MockMatchSource {
    most_recent: Mutex<bool>,
    batch: Mutex<Vec<MatchRecord>>,
    full_games: Mutex<Option<Vec<MatchRecord>>>,
    full_delay: Mutex<Option<Duration>>,
    fail_identity: Mutex<bool>,
    fail_batch: Mutex<bool>,
    fail_full: Mutex<bool>,

    pub identity_calls: AtomicUsize,
    pub recent_calls: AtomicUsize,
    pub batch_calls: AtomicUsize,
    pub full_calls: AtomicUsize,
    /// (count, offset) of the last `fetch_match_batch` call
    pub last_batch_args: Mutex<Option<(usize, usize)>>,
}

impl MockMatchSource {
    pub fn new() -> Self {
        Self {
            most_recent: Mutex::new(true),
            batch: Mutex::new(Vec::new()),
            full_games: Mutex::new(None),
            full_delay: Mutex::new(None),
            fail_identity: Mutex::new(false),
            fail_batch: Mutex::new(false),
            fail_full: Mutex::new(false),
            identity_calls: AtomicUsize::new(0),
            recent_calls: AtomicUsize::new(0),
            batch_calls: AtomicUsize::new(0),
            full_calls: AtomicUsize::new(0),
            last_batch_args: Mutex::new(None),
        }
    }

    pub fn set_most_recent(&self, value: bool) {
        *self.most_recent.lock().unwrap() = value;
    }

    pub fn set_batch(&self, ids: &[&str]) {
        *self.batch.lock().unwrap() = records(ids);
    }

    pub fn set_full_games(&self, ids: &[&str]) {
        *self.full_games.lock().unwrap() = Some(records(ids));
    }

    pub fn set_full_delay(&self, delay: Duration) {
        *self.full_delay.lock().unwrap() = Some(delay);
    }

    pub fn fail_identity(&self) {
        *self.fail_identity.lock().unwrap() = true;
    }

    pub fn fail_batch(&self) {
        *self.fail_batch.lock().unwrap() = true;
    }

    pub fn fail_full(&self) {
        *self.fail_full.lock().unwrap() = true;
    }
}

impl Default for MockMatchSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MatchSource for MockMatchSource {
    async fn resolve_identity(
        &self,
        _summoner_name: &str,
        _server: &str,
    ) -> DomainResult<PlayerIdentity> {
        self.identity_calls.fetch_add(1, Ordering::SeqCst);
        if *self.fail_identity.lock().unwrap() {
            return Err(DomainError::UpstreamUnavailable("identity down".into()));
        }
        Ok(identity())
    }

    async fn is_most_recent_match(
        &self,
        _server: &str,
        _puuid: &str,
        _match_id: &str,
    ) -> DomainResult<bool> {
        self.recent_calls.fetch_add(1, Ordering::SeqCst);
        Ok(*self.most_recent.lock().unwrap())
    }

    async fn fetch_match_batch(
        &self,
        _puuid: &str,
        _server: &str,
        count: usize,
        offset: usize,
        _filter: QueueFilter,
    ) -> DomainResult<Vec<MatchRecord>> {
        self.batch_calls.fetch_add(1, Ordering::SeqCst);
        if *self.fail_batch.lock().unwrap() {
            return Err(DomainError::UpstreamUnavailable("matches down".into()));
        }
        *self.last_batch_args.lock().unwrap() = Some((count, offset));
        Ok(self.batch.lock().unwrap().clone())
    }

    async fn fetch_full_profile(
        &self,
        _summoner_name: &str,
        _server: &str,
        count: usize,
        _filter: QueueFilter,
    ) -> DomainResult<CachedProfile> {
        self.full_calls.fetch_add(1, Ordering::SeqCst);
        if *self.fail_full.lock().unwrap() {
            return Err(DomainError::UpstreamUnavailable("profile down".into()));
        }

        let delay = *self.full_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let games = match self.full_games.lock().unwrap().clone() {
            Some(games) => games,
            None => (0..count)
                .map(|i| MatchRecord::new(format!("FRESH_{i}")))
                .collect(),
        };
        Ok(CachedProfile::new(snapshot(), games))
    }
}

/// Store wrapper that counts reads and writes.
pub struct CountingStore {
    inner: InMemoryProfileStore,
    pub gets: AtomicUsize,
    pub puts: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Self {
        Self {
            inner: InMemoryProfileStore::new(),
            gets: AtomicUsize::new(0),
            puts: AtomicUsize::new(0),
        }
    }

    /// Seed a record without counting the write.
    pub async fn seed(&self, key: &CacheKey, profile: &CachedProfile) {
        self.inner.put(key, profile).await.unwrap();
    }

    pub async fn stored(&self, key: &CacheKey) -> Option<CachedProfile> {
        self.inner.get(key).await.unwrap()
    }
}

impl Default for CountingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileStore for CountingStore {
    async fn get(&self, key: &CacheKey) -> DomainResult<Option<CachedProfile>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key).await
    }

    async fn put(&self, key: &CacheKey, profile: &CachedProfile) -> DomainResult<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.inner.put(key, profile).await
    }
}
