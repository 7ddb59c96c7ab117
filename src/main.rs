//! tickerd: HTTP ticker lookup service with per-key access counting.
//!
//! Startup sequence: load config, fetch the SEC reference dataset into
//! memory, then serve lookups. A failed initial fetch is fatal; the
//! process exits nonzero rather than serve an empty table.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use tickerd::config::Config;
use tickerd::counter::KeyedCounterStore;
use tickerd::dataset;
use tickerd::service::{router, AppState, LookupService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();

    info!("fetching reference dataset from {}", config.dataset_url);
    let dataset = Arc::new(dataset::fetch(&config).await?);

    let counters = Arc::new(KeyedCounterStore::new());
    let lookup = Arc::new(LookupService::new(dataset, counters));
    let app = router(AppState { lookup });

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("listening on {}", config.addr);
    axum::serve(listener, app).await?;

    Ok(())
}
