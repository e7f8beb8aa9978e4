//! Cache addressing: one key per (server, summoner) pair.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Composite key addressing one cached profile in the store.
///
/// Both components are trimmed and lowercased at construction so that
/// `EUW1 / Faker` and `euw1 / faker` address the same record. The rendered
/// form `server:summoner` is the token handed to the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    server: String,
    summoner: String,
}

impl CacheKey {
    pub fn new(server: impl AsRef<str>, summoner: impl AsRef<str>) -> Self {
        Self {
            server: server.as_ref().trim().to_lowercase(),
            summoner: summoner.as_ref().trim().to_lowercase(),
        }
    }

    /// Platform identifier, e.g. `euw1`.
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Normalized summoner name.
    pub fn summoner(&self) -> &str {
        &self.summoner
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.server, self.summoner)
    }
}
