//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Errors surfaced by API fetches to the command layer.
///
/// None of these are fatal: the REPL prints them and keeps running.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Network retrieval failed (connection, timeout or non-success status)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body or cached payload did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request could not be issued at all
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Reading input or writing REPL output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;
