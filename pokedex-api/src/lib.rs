//! Pokedex API
//!
//! A thin HTTP aggregator over the public pokemon catalog: `/list` enriches a
//! catalog page with per-pokemon details and `/details/{name}` merges a
//! pokemon with its localized description.

#![deny(clippy::all, clippy::pedantic, clippy::nursery, dead_code)]

/// Upstream catalog client
pub mod catalog;

/// Response aggregation
pub mod pokedex;

/// HTTP routes
pub mod routes;

/// Router assembly and server bootstrap
pub mod server;

/// Configuration, errors and extractors
pub mod types;
