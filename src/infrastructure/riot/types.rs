//! Wire types for the Riot API endpoints the client consumes.
//!
//! Only the summoner lookup gets a typed DTO; league entries, masteries and
//! match bodies are carried as opaque JSON, since the cache engine never
//! interprets them.

use serde::Deserialize;

/// summoner-v4 `SummonerDTO`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    /// Encrypted summoner id, used by league-v4 lookups
    pub id: String,
    /// Globally unique player id, stable across renames
    pub puuid: String,
    /// Display name; absent on newer API responses
    #[serde(default)]
    pub name: String,
    pub profile_icon_id: i64,
    pub summoner_level: i64,
}
