pub mod config;
pub mod identity;
pub mod key;
pub mod profile;

pub use config::{CacheConfig, Config, DatabaseConfig, LoggingConfig, RiotConfig};
pub use identity::{PlayerIdentity, QueueFilter};
pub use key::CacheKey;
pub use profile::{CachedProfile, MatchRecord, SummonerSnapshot};
