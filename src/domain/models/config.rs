use serde::{Deserialize, Serialize};

/// Main configuration structure for riftstats
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Cache freshness and backfill configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Riot API client configuration
    #[serde(default)]
    pub riot: RiotConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Cache freshness configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CacheConfig {
    /// Maximum age of a cached profile in seconds; one value for the whole
    /// system, not per record
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Number of matches fetched per backfill batch
    #[serde(default = "default_backfill_batch_size")]
    pub backfill_batch_size: usize,
}

const fn default_ttl_secs() -> u64 {
    600
}

const fn default_backfill_batch_size() -> usize {
    10
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            backfill_batch_size: default_backfill_batch_size(),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DatabaseConfig {
    /// Path to the `SQLite` database file
    #[serde(default = "default_database_path")]
    pub path: String,

    /// Maximum number of database connections in pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_path() -> String {
    ".riftstats/riftstats.db".to_string()
}

const fn default_max_connections() -> u32 {
    10
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            max_connections: default_max_connections(),
        }
    }
}

/// Riot API client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RiotConfig {
    /// Riot developer API key (`X-Riot-Token`)
    #[serde(default)]
    pub api_key: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Sustained request rate against the Riot API
    #[serde(default = "default_rate_limit_rps")]
    pub rate_limit_rps: u32,
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_rate_limit_rps() -> u32 {
    20
}

impl Default for RiotConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            rate_limit_rps: default_rate_limit_rps(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
