//! # waresd — wares daemon
//!
//! Composition root that wires the adapters together and starts the
//! server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Connect the document store (continuing degraded if unreachable)
//! - Construct the repository implementation (adapter)
//! - Construct the application service, injecting the repository via its
//!   port trait
//! - Build the axum router, injecting the application service
//! - Bind to a TCP port and serve, with graceful shutdown on ctrl-c
//! - Disconnect the store at process exit
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

use tracing_subscriber::EnvFilter;

use wares_adapter_http_axum::state::AppState;
use wares_adapter_storage_mongodb::MongoRecordRepository;
use wares_app::services::record_service::RecordService;

use waresd::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // One store handle per process: connected here, released after the
    // server stops. A failed connection is not fatal — the API degrades
    // to 500s and the health endpoint reports the state.
    let mut store = config.store_config().connect().await;
    if !store.is_connected() {
        tracing::warn!("starting degraded: document store unreachable");
    }

    let repo = MongoRecordRepository::new(store.clone(), config.store.collection.clone());
    let state = AppState::new(RecordService::new(repo), store.clone());
    let app = wares_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, "waresd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.disconnect().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
