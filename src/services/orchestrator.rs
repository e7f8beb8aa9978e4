//! The single decision procedure: serve cached, extend cached, or refetch.

use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::domain::errors::DomainResult;
use crate::domain::models::{CacheConfig, CacheKey, CachedProfile, QueueFilter};
use crate::domain::ports::{MatchSource, ProfileStore};
use crate::services::{BackfillPlanner, StalenessChecker, TtlPolicy};

/// Why a resolve call bypassed the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissReason {
    /// No record stored under the key
    Absent,
    /// Record older than the configured TTL
    Expired,
    /// Record's head match is no longer the player's most recent one
    Stale,
}

/// Which path a resolve call took.
///
/// An explicit tagged outcome rather than an ambiguous absent value, so
/// callers and tests can tell *why* a refetch happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    /// Stored record returned verbatim
    Hit,
    /// Stored record extended with one backfill batch
    PartialHit,
    /// Full refetch from the authoritative source
    Miss(MissReason),
}

/// A resolved profile together with the path that produced it.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub profile: CachedProfile,
    pub outcome: CacheOutcome,
}

/// Composes TTL, staleness and backfill into the read-modify-write cycle
/// against the store.
///
/// Four checks in strict order, short-circuiting to a full refetch on the
/// first failure: existence, TTL, staleness, sufficiency. The orchestrator
/// is the only writer; each resolve performs at most one store read, one
/// store write and two upstream calls.
///
/// Writers are serialized per key: a keyed mutex is held from before the
/// store read until after the write, on every exit path. Concurrent
/// resolves for one absent or stale key therefore trigger a single
/// upstream fetch (single-flight), while different keys never block each
/// other.
pub struct CacheOrchestrator<S: MatchSource, P: ProfileStore> {
    source: Arc<S>,
    store: Arc<P>,
    ttl: TtlPolicy,
    staleness: StalenessChecker<S>,
    backfill: BackfillPlanner<S>,
    // Entries are never evicted; bounded by the number of distinct keys seen.
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl<S: MatchSource, P: ProfileStore> CacheOrchestrator<S, P> {
    pub fn new(source: Arc<S>, store: Arc<P>, config: &CacheConfig) -> Self {
        Self {
            ttl: TtlPolicy::from_secs(config.ttl_secs),
            staleness: StalenessChecker::new(Arc::clone(&source)),
            backfill: BackfillPlanner::new(Arc::clone(&source), config.backfill_batch_size),
            source,
            store,
            locks: DashMap::new(),
        }
    }

    fn key_lock(&self, key: &CacheKey) -> Arc<Mutex<()>> {
        self.locks
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Resolve a profile with at least `requested_count` matches if the
    /// player has played that many.
    ///
    /// `filter` narrows full fetches only; cached and backfilled data keeps
    /// whatever queues it was stored with, matching the reference behavior.
    ///
    /// # Errors
    /// Upstream and store failures propagate immediately; there is no retry
    /// and no fallback to stale data.
    pub async fn resolve(
        &self,
        key: &CacheKey,
        requested_count: usize,
        filter: QueueFilter,
    ) -> DomainResult<Resolution> {
        let lock = self.key_lock(key);
        let _guard = lock.lock().await;

        // [1] Existence
        let Some(profile) = self.store.get(key).await? else {
            debug!(key = %key, "store miss");
            return self.full_fetch(key, requested_count, filter, MissReason::Absent).await;
        };

        // [2] TTL
        if !self.ttl.is_valid(profile.cached_at, Utc::now()) {
            debug!(key = %key, cached_at = %profile.cached_at, "cached profile expired");
            return self.full_fetch(key, requested_count, filter, MissReason::Expired).await;
        }

        // [3] Staleness
        let check = self.staleness.check(key, &profile).await?;
        if !check.fresh {
            debug!(key = %key, "cached head is no longer the most recent match");
            return self.full_fetch(key, requested_count, filter, MissReason::Stale).await;
        }

        // [4] Sufficiency
        let stored = profile.game_count();
        if stored >= requested_count {
            info!(key = %key, stored = stored, requested = requested_count, "cache hit");
            return Ok(Resolution {
                profile,
                outcome: CacheOutcome::Hit,
            });
        }

        info!(key = %key, stored = stored, requested = requested_count, "partial hit, backfilling");
        let mut extended = self
            .backfill
            .extend(key, &check.identity, profile, requested_count)
            .await?;
        extended.cached_at = Utc::now();
        self.store.put(key, &extended).await?;

        Ok(Resolution {
            profile: extended,
            outcome: CacheOutcome::PartialHit,
        })
    }

    /// Fetch a complete fresh profile and overwrite whatever the key held.
    ///
    /// Never merges with the record it replaces; exactly one write.
    async fn full_fetch(
        &self,
        key: &CacheKey,
        requested_count: usize,
        filter: QueueFilter,
        reason: MissReason,
    ) -> DomainResult<Resolution> {
        let mut profile = self
            .source
            .fetch_full_profile(key.summoner(), key.server(), requested_count, filter)
            .await?;
        profile.cached_at = Utc::now();
        self.store.put(key, &profile).await?;

        info!(key = %key, reason = ?reason, games = profile.game_count(), "full refetch stored");
        Ok(Resolution {
            profile,
            outcome: CacheOutcome::Miss(reason),
        })
    }
}
