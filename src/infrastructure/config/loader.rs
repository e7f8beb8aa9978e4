use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid ttl_secs: {0}. Must be positive")]
    InvalidTtl(u64),

    #[error("Invalid backfill_batch_size: {0}. Must be between 1 and 100")]
    InvalidBatchSize(usize),

    #[error("Invalid rate_limit_rps: {0}. Must be at least 1")]
    InvalidRateLimit(u32),

    #[error("Invalid timeout_secs: {0}. Must be positive")]
    InvalidTimeout(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Database path cannot be empty")]
    EmptyDatabasePath,

    #[error("Invalid max_connections: {0}. Must be at least 1")]
    InvalidMaxConnections(u32),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .riftstats/config.yaml (project config)
    /// 3. .riftstats/local.yaml (local overrides, optional)
    /// 4. Environment variables (RIFTSTATS_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".riftstats/config.yaml"))
            .merge(Yaml::file(".riftstats/local.yaml"))
            .merge(Env::prefixed("RIFTSTATS_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.cache.ttl_secs == 0 {
            return Err(ConfigError::InvalidTtl(config.cache.ttl_secs));
        }

        if config.cache.backfill_batch_size == 0 || config.cache.backfill_batch_size > 100 {
            return Err(ConfigError::InvalidBatchSize(config.cache.backfill_batch_size));
        }

        if config.database.path.is_empty() {
            return Err(ConfigError::EmptyDatabasePath);
        }

        if config.database.max_connections == 0 {
            return Err(ConfigError::InvalidMaxConnections(
                config.database.max_connections,
            ));
        }

        if config.riot.rate_limit_rps == 0 {
            return Err(ConfigError::InvalidRateLimit(config.riot.rate_limit_rps));
        }

        if config.riot.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.riot.timeout_secs));
        }

        match config.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => return Err(ConfigError::InvalidLogLevel(other.to_string())),
        }

        match config.logging.format.as_str() {
            "json" | "pretty" => {}
            other => return Err(ConfigError::InvalidLogFormat(other.to_string())),
        }

        Ok(())
    }
}
