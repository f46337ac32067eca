//! API Module
//!
//! Read-through client for the PokeAPI REST endpoints.
//!
//! # Endpoints
//! - `GET /location/` - Paginated location listing
//! - `GET /location-area/` - Paginated location-area listing
//! - `GET /location-area/{name}` - Location-area details
//! - `GET /pokemon/{name}` - Creature details

pub mod client;

pub use client::PokeApiClient;
