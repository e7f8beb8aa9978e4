use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{CachedProfile, MatchRecord, PlayerIdentity, QueueFilter};

/// Authoritative source for player identity and match history
///
/// Implemented by the Riot API client in production. All operations are
/// read-only against upstream; rate limiting, auth and transport concerns
/// live behind this boundary.
#[async_trait]
pub trait MatchSource: Send + Sync {
    /// Resolve the stable identity (puuid) behind a display name
    ///
    /// # Errors
    /// Returns `SummonerNotFound` when the name does not exist on the given
    /// server, `UpstreamUnavailable` on transport or API failures.
    async fn resolve_identity(
        &self,
        summoner_name: &str,
        server: &str,
    ) -> DomainResult<PlayerIdentity>;

    /// Whether `match_id` is still the player's most recent match
    ///
    /// # Errors
    /// Returns `UpstreamUnavailable` on transport or API failures.
    async fn is_most_recent_match(
        &self,
        server: &str,
        puuid: &str,
        match_id: &str,
    ) -> DomainResult<bool>;

    /// Fetch one batch of matches, `count` entries starting at `offset`
    ///
    /// Matches come back most-recent-first within the batch. A short batch
    /// (fewer than `count` entries) means the player has no more history.
    ///
    /// # Errors
    /// Returns `UpstreamUnavailable` on transport or API failures.
    async fn fetch_match_batch(
        &self,
        puuid: &str,
        server: &str,
        count: usize,
        offset: usize,
        filter: QueueFilter,
    ) -> DomainResult<Vec<MatchRecord>>;

    /// Fetch a complete profile: snapshot plus exactly `count` most recent
    /// matches (fewer if the player has not played that many)
    ///
    /// # Errors
    /// Returns `SummonerNotFound` when the name does not exist,
    /// `UpstreamUnavailable` on transport or API failures.
    async fn fetch_full_profile(
        &self,
        summoner_name: &str,
        server: &str,
        count: usize,
        filter: QueueFilter,
    ) -> DomainResult<CachedProfile>;
}
