//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the async trait interfaces that infrastructure
//! adapters must implement:
//! - `ProfileStore`: persistence of cached profiles by key
//! - `MatchSource`: the authoritative source for identity and match history
//!
//! These traits define the contracts that allow the cache engine to be
//! independent of the concrete store and Riot API client.

pub mod match_source;
pub mod profile_store;

pub use match_source::MatchSource;
pub use profile_store::ProfileStore;
