//! Domain layer for the riftstats cache engine
//!
//! This module contains the cache data model, domain errors and the port
//! traits that infrastructure adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
