//! Location models
//!
//! Paginated location listings and single location-area details.

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// One page of a paginated listing (`/location/` or `/location-area/`).
///
/// `next` and `previous` are absolute URLs, `None` at either end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationPage {
    /// Total number of resources across all pages
    pub count: u32,
    /// URL of the following page
    pub next: Option<String>,
    /// URL of the preceding page
    pub previous: Option<String>,
    /// Resources on this page
    pub results: Vec<NamedResource>,
}

/// Details of a single location area (`/location-area/{name}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationArea {
    pub id: u32,
    pub name: String,
    pub game_index: u32,
    /// The location this area belongs to
    pub location: NamedResource,
    /// Creatures that can be encountered here
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

impl LocationArea {
    /// Names of the creatures encounterable in this area, in API order.
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}
