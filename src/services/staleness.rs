//! Content-level validity: is the cached head still the latest match?

use std::sync::Arc;

use tracing::debug;

use crate::domain::errors::DomainResult;
use crate::domain::models::{CacheKey, CachedProfile, PlayerIdentity};
use crate::domain::ports::MatchSource;

/// Result of a staleness check.
///
/// Carries the resolved identity so the caller can reuse it for a
/// follow-up backfill without resolving the display name a second time.
#[derive(Debug, Clone)]
pub struct FreshnessCheck {
    pub identity: PlayerIdentity,
    pub fresh: bool,
}

/// Decides whether a time-valid record is still content-valid upstream.
///
/// Resolves the player's puuid first (display names change, the puuid does
/// not), then asks the authoritative source whether the cached head match
/// is still that player's most recent one.
///
/// Failure policy: fail closed. An upstream error during the check
/// propagates and aborts the whole resolve call; there is no fallback to
/// TTL-only validation.
pub struct StalenessChecker<S: MatchSource> {
    source: Arc<S>,
}

impl<S: MatchSource> StalenessChecker<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Check a cached profile against upstream, returning the resolved
    /// identity alongside the verdict.
    ///
    /// A profile with no cached games is stale by definition: there is no
    /// head to compare, so it cannot be served.
    pub async fn check(
        &self,
        key: &CacheKey,
        profile: &CachedProfile,
    ) -> DomainResult<FreshnessCheck> {
        let identity = self
            .source
            .resolve_identity(key.summoner(), key.server())
            .await?;

        let Some(head) = profile.head_match_id() else {
            debug!(key = %key, "cached profile has no games, treating as stale");
            return Ok(FreshnessCheck {
                identity,
                fresh: false,
            });
        };

        let fresh = self
            .source
            .is_most_recent_match(key.server(), &identity.puuid, head)
            .await?;

        debug!(key = %key, head = head, fresh = fresh, "staleness check complete");
        Ok(FreshnessCheck { identity, fresh })
    }

    /// Convenience wrapper when the caller only needs the verdict.
    pub async fn is_fresh(&self, key: &CacheKey, profile: &CachedProfile) -> DomainResult<bool> {
        Ok(self.check(key, profile).await?.fresh)
    }
}
