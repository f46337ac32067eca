//! Pokedex - A command-line client for the PokeAPI
//!
//! Browses location areas, explores them, and catches creatures, with every
//! API response read through a process-local TTL cache.

use std::io;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{repl, CacheStore, Config, PokeApiClient, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr, so it never mixes
///    with REPL output)
/// 2. Load configuration from environment variables
/// 3. Create the shared response cache and the API client
/// 4. Run the REPL on stdin/stdout until `exit` or end of input
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: api_url={}, request_timeout={}s",
        config.api_url, config.request_timeout
    );

    let cache = Arc::new(CacheStore::new());
    let client = PokeApiClient::new(&config, cache).context("Failed to build HTTP client")?;
    let mut session = Session::new(client);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();
    repl::run(&mut session, stdin, &mut stdout)
        .await
        .context("REPL terminated on an I/O error")?;

    info!("Pokedex closed");
    Ok(())
}
