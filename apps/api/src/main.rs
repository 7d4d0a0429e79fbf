mod config;
mod editor;
mod errors;
mod export;
mod gateway;
mod models;
mod render;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::export::Exporter;
use crate::gateway::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::ResumeStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on a malformed port)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitae API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the generation gateway — the credential is handed over
    // here and never read from the environment again.
    let generator = Arc::new(GeminiClient::new(config.gemini_api_key.clone()));
    info!("Generation gateway initialized (model: {})", gateway::client::MODEL);
    if config.gemini_api_key.trim().is_empty() {
        warn!("GEMINI_API_KEY is not set; generation requests will fail until one is provided");
    }

    // In-memory store, seeded with the sample resume
    let store = ResumeStore::new();

    // Export adapters write finished documents under the export directory
    let exporter = Exporter::new(&config.export_dir);
    info!("Exporter initialized (dir: {})", config.export_dir);

    let state = AppState {
        store,
        generator,
        exporter,
        config: config.clone(),
        generation_busy: Arc::new(AtomicBool::new(false)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
