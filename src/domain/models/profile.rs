//! Cached profile payload: summoner snapshot plus ordered match history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One played match.
///
/// The engine only ever inspects `match_id`; everything needed for display
/// (participants, champion, KDA, ...) travels in `detail` and is flattened
/// into the serialized record untouched. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub match_id: String,
    #[serde(flatten)]
    pub detail: Map<String, Value>,
}

impl MatchRecord {
    pub fn new(match_id: impl Into<String>) -> Self {
        Self {
            match_id: match_id.into(),
            detail: Map::new(),
        }
    }

    pub fn with_detail(match_id: impl Into<String>, detail: Map<String, Value>) -> Self {
        Self {
            match_id: match_id.into(),
            detail,
        }
    }
}

/// Display identity cached alongside the match history.
///
/// `rank` and `masteries` are opaque JSON blobs shaped by the upstream
/// client; the cache engine never interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummonerSnapshot {
    pub alias: String,
    pub level: i64,
    pub profile_icon_id: i64,
    #[serde(default)]
    pub rank: Value,
    #[serde(default)]
    pub masteries: Value,
}

/// The cached payload for one [`CacheKey`](super::CacheKey).
///
/// `games` is ordered most-recent-first and must never contain duplicate
/// match identifiers; both invariants are preserved across merges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedProfile {
    pub summoner: SummonerSnapshot,
    pub games: Vec<MatchRecord>,
    pub cached_at: DateTime<Utc>,
}

impl CachedProfile {
    pub fn new(summoner: SummonerSnapshot, games: Vec<MatchRecord>) -> Self {
        Self {
            summoner,
            games,
            cached_at: Utc::now(),
        }
    }

    /// Identifier of the most recent cached match, if any.
    pub fn head_match_id(&self) -> Option<&str> {
        self.games.first().map(|g| g.match_id.as_str())
    }

    pub fn contains_match(&self, match_id: &str) -> bool {
        self.games.iter().any(|g| g.match_id == match_id)
    }

    pub fn game_count(&self) -> usize {
        self.games.len()
    }
}
