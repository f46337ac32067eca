//! Resource models for the PokeAPI
//!
//! Typed shapes the API client decodes responses into. Unknown fields are
//! ignored, so each struct is the projection the commands actually use, and
//! that projection is what gets re-encoded into the cache.

pub mod location;
pub mod pokemon;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use location::{LocationArea, LocationPage, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};

/// A `{ name, url }` reference to another API resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}
