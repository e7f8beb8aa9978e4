//! Stable player identity and queue filtering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identity resolved from a display name via the authoritative source.
///
/// The `puuid` is the stable handle: display names can change at any time,
/// so every upstream match lookup goes through it rather than the alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerIdentity {
    pub puuid: String,
    pub summoner_id: String,
    pub alias: String,
    pub level: i64,
    pub profile_icon_id: i64,
}

/// Which queues a match history request covers.
///
/// Backfill batches always use [`QueueFilter::All`]; the filter only narrows
/// full profile fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QueueFilter {
    #[default]
    All,
    Ranked,
    Normal,
}

impl QueueFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            QueueFilter::All => "all",
            QueueFilter::Ranked => "ranked",
            QueueFilter::Normal => "normal",
        }
    }
}

impl fmt::Display for QueueFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueueFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(QueueFilter::All),
            "ranked" => Ok(QueueFilter::Ranked),
            "normal" => Ok(QueueFilter::Normal),
            other => Err(format!(
                "invalid queue filter '{other}', expected one of: all, ranked, normal"
            )),
        }
    }
}
