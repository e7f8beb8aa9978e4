//! Riot Games API client implementing the `MatchSource` port.
//!
//! Summoner, league and mastery lookups go to the platform host
//! (`euw1.api.riotgames.com`); match-v5 history goes to the regional host
//! (`europe.api.riotgames.com`). Every request passes through a token
//! bucket rate limiter, since Riot enforces strict application rate limits.

pub mod client;
pub mod error;
pub mod routing;
pub mod types;

pub use client::RiotApiClient;
pub use error::RiotApiError;
