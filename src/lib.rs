//! Riftstats - League of Legends player statistics backend
//!
//! Riftstats answers "show me this summoner's recent matches" by querying the
//! Riot Games API and caching each player's profile. The heart of the crate is
//! the cache freshness and incremental-backfill engine: per request it decides
//! whether the cached match history can be served as-is, must be extended with
//! one more batch of matches, or must be discarded and refetched in full.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Cache models, error types and port traits
//! - **Service Layer** (`services`): TTL policy, staleness check, backfill
//!   planning and the cache orchestrator that composes them
//! - **Infrastructure Layer** (`infrastructure`): Riot API client, SQLite
//!   profile store, configuration loading
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use riftstats::{CacheKey, CacheOrchestrator, QueueFilter};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Build a CacheOrchestrator and resolve a profile:
//!     // let resolution = orchestrator.resolve(&key, 10, QueueFilter::All).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    CacheConfig, CacheKey, CachedProfile, Config, DatabaseConfig, LoggingConfig, MatchRecord,
    PlayerIdentity, QueueFilter, RiotConfig, SummonerSnapshot,
};
pub use domain::ports::{MatchSource, ProfileStore};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{
    BackfillPlanner, CacheOrchestrator, CacheOutcome, MissReason, Resolution, StalenessChecker,
    TtlPolicy,
};
