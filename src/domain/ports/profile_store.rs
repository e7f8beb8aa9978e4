use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{CacheKey, CachedProfile};

/// Persistence port for cached profiles
///
/// A plain key/value contract: the store owns the persisted bytes, the
/// orchestrator is the only component that writes through it. There is no
/// delete operation; expiry is logical (TTL), never physical.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the cached profile for a key
    ///
    /// Returns `None` on a store miss.
    ///
    /// # Errors
    /// Returns error if the persistence layer is unreachable.
    async fn get(&self, key: &CacheKey) -> DomainResult<Option<CachedProfile>>;

    /// Write a profile under a key, overwriting any existing record
    ///
    /// # Errors
    /// Returns error if the persistence layer is unreachable or the
    /// payload cannot be serialized.
    async fn put(&self, key: &CacheKey, profile: &CachedProfile) -> DomainResult<()>;
}
