//! Integration Tests for the read-through API client
//!
//! Runs the client against a wiremock server to count real network
//! retrievals around the cache.

use std::sync::Arc;

use pokedex::cache::CACHE_TTL;
use pokedex::models::{LocationPage, Pokemon};
use pokedex::{CacheStore, Config, PokeApiClient, PokedexError};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// == Helper Functions ==

fn client_for(server: &MockServer) -> PokeApiClient {
    let config = Config {
        api_url: format!("{}/api/v2", server.uri()),
        request_timeout: 5,
    };
    PokeApiClient::new(&config, Arc::new(CacheStore::new())).unwrap()
}

fn pikachu() -> serde_json::Value {
    json!({
        "id": 25,
        "name": "pikachu",
        "base_experience": 112,
        "height": 4,
        "weight": 60,
        "abilities": [{"ability": {"name": "static", "url": "u"}, "is_hidden": false, "slot": 1}],
        "stats": [{"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "u"}}],
        "types": [{"slot": 1, "type": {"name": "electric", "url": "u"}}]
    })
}

// == Fetch-or-Populate ==

#[tokio::test]
async fn test_miss_fetches_once_then_serves_from_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/pikachu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pikachu()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let first = client.pokemon("pikachu").await.unwrap();
    let second = client.pokemon("pikachu").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.base_experience, Some(112));
    assert_eq!(client.cache().len(), 1);
}

#[tokio::test]
async fn test_cached_payload_is_reencoded_projection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/pikachu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pikachu()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let fetched = client.pokemon("pikachu").await.unwrap();

    let cached = client.cache().get(&client.pokemon_url("pikachu")).unwrap();
    let cached: serde_json::Value = serde_json::from_slice(&cached).unwrap();

    assert!(cached.get("abilities").is_none());
    assert_eq!(serde_json::from_value::<Pokemon>(cached).unwrap(), fetched);
}

#[tokio::test]
async fn test_distinct_urls_are_cached_separately() {
    let server = MockServer::start().await;
    for name in ["pikachu", "bulbasaur"] {
        Mock::given(method("GET"))
            .and(path(format!("/api/v2/pokemon/{}", name)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": name })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    let (a, b) = tokio::join!(client.pokemon("pikachu"), client.pokemon("bulbasaur"));

    assert_eq!(a.unwrap().name, "pikachu");
    assert_eq!(b.unwrap().name, "bulbasaur");
    assert_eq!(client.cache().len(), 2);
}

#[tokio::test]
async fn test_clones_share_one_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/location-area/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{"name": "canalave-city-area", "url": "u"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let clone = client.clone();
    let url = client.first_location_area_page_url();

    let page = client.location_area_page(&url).await.unwrap();
    let again = clone.location_area_page(&url).await.unwrap();

    assert_eq!(page, again);
    assert_eq!(page.results[0].name, "canalave-city-area");
}

#[tokio::test]
async fn test_location_listing_reads_through_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/location/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1070,
            "next": format!("{}/api/v2/location/?offset=20&limit=20", server.uri()),
            "previous": null,
            "results": [
                {"name": "canalave-city", "url": "u"},
                {"name": "eterna-city", "url": "u"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let url = client.first_location_page_url();
    assert!(url.ends_with("/api/v2/location/"));

    let page = client.location_page(&url).await.unwrap();
    let again = client.location_page(&url).await.unwrap();

    assert_eq!(page, again);
    assert_eq!(page.count, 1070);
    assert!(page.previous.is_none());
    assert_eq!(
        page.results.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
        vec!["canalave-city", "eterna-city"]
    );
}

// == Error Propagation ==

#[tokio::test]
async fn test_corrupt_cache_entry_blocks_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pikachu()))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .cache()
        .set(client.pokemon_url("pikachu"), b"{\"name\": 12".to_vec(), CACHE_TTL);

    let result = client.pokemon("pikachu").await;
    assert!(matches!(result, Err(PokedexError::Decode(_))));
}

#[tokio::test]
async fn test_not_found_is_transport_error_and_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/missingno"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);

    for _ in 0..2 {
        let result = client.pokemon("missingno").await;
        assert!(matches!(result, Err(PokedexError::Transport(_))));
    }
    assert!(client.cache().is_empty());
}

#[tokio::test]
async fn test_undecodable_body_is_decode_error_and_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/location-area/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result: Result<LocationPage, _> = client
        .location_area_page(&client.first_location_area_page_url())
        .await;

    assert!(matches!(result, Err(PokedexError::Decode(_))));
    assert!(client.cache().is_empty());
}

#[tokio::test]
async fn test_slow_response_hits_request_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(pikachu())
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = Config {
        api_url: format!("{}/api/v2", server.uri()),
        request_timeout: 1,
    };
    let client = PokeApiClient::new(&config, Arc::new(CacheStore::new())).unwrap();

    let result = client.pokemon("pikachu").await;
    assert!(matches!(result, Err(PokedexError::Transport(_))));
}

// == Write-back Failures ==

/// Decodes fine but refuses to encode, so the cache write-back fails.
#[derive(Debug, Deserialize)]
struct Unencodable {
    name: String,
}

impl Serialize for Unencodable {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom("refuses to encode"))
    }
}

#[tokio::test]
async fn test_writeback_encode_failure_still_returns_value() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/ditto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "ditto"})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let url = client.pokemon_url("ditto");

    let value: Unencodable = client.fetch(&url).await.unwrap();
    assert_eq!(value.name, "ditto");
    assert!(client.cache().is_empty());

    // Nothing was cached, so the next call goes back to the network
    let again: Unencodable = client.fetch(&url).await.unwrap();
    assert_eq!(again.name, "ditto");
}
