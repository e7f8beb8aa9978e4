//! Domain errors for the riftstats cache engine.

use thiserror::Error;

/// Domain-level errors that can occur while resolving a cached profile.
///
/// All three externally-caused failures propagate to the caller of
/// `resolve`: the engine performs no retries and never falls back to
/// possibly-stale data once a required upstream call has failed.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Summoner not found: {summoner} on {server}")]
    SummonerNotFound { summoner: String, server: String },

    #[error("Upstream source unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::StoreUnavailable(err.to_string())
    }
}
