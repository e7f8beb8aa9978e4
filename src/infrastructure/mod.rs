//! Infrastructure layer module
//!
//! This module contains the infrastructure adapters and external integrations:
//! - Riot API client (reqwest, implements `MatchSource`)
//! - Profile stores (SQLite with sqlx, plus an in-memory store)
//! - Configuration management (figment)
//!
//! Infrastructure implementations satisfy the port traits defined in the
//! domain layer.

pub mod config;
pub mod riot;
pub mod store;
