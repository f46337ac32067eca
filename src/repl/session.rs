//! REPL session state
//!
//! Holds everything that persists between commands: the API client, the
//! location-area pagination cursor, the caught collection, and the random
//! source used for catch rolls.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::api::PokeApiClient;
use crate::models::Pokemon;

/// State carried across REPL commands.
#[derive(Debug)]
pub struct Session {
    pub(crate) client: PokeApiClient,
    /// URL of the next location-area page, `None` past the last page
    pub(crate) next: Option<String>,
    /// URL of the previous location-area page, `None` on the first page
    pub(crate) previous: Option<String>,
    /// Caught creatures keyed by the name they were caught under
    pub(crate) caught: BTreeMap<String, Pokemon>,
    pub(crate) rng: StdRng,
}

impl Session {
    /// Creates a session positioned before the first location-area page.
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_rng(client, StdRng::from_entropy())
    }

    /// Creates a session with a caller-supplied random source.
    pub fn with_rng(client: PokeApiClient, rng: StdRng) -> Self {
        let next = Some(client.first_location_area_page_url());
        Self {
            client,
            next,
            previous: None,
            caught: BTreeMap::new(),
            rng,
        }
    }

    /// Returns the API client.
    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    /// Returns the caught creatures, ordered by name.
    pub fn caught(&self) -> &BTreeMap<String, Pokemon> {
        &self.caught
    }

    /// URL the next `map` will fetch.
    pub fn next_page(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// URL the next `mapb` will fetch.
    pub fn previous_page(&self) -> Option<&str> {
        self.previous.as_deref()
    }
}
