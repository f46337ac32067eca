//! Pokedex - A command-line client for the PokeAPI
//!
//! Browses location areas, explores them, and catches creatures, with every
//! API response read through a process-local TTL cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;

pub use api::PokeApiClient;
pub use cache::CacheStore;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Session;
