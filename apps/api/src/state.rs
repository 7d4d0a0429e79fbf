use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::config::Config;
use crate::export::Exporter;
use crate::gateway::ContentGenerator;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: ResumeStore,
    /// Pluggable generation backend. Production: `GeminiClient`; tests
    /// substitute a fake transport.
    pub generator: Arc<dyn ContentGenerator>,
    pub exporter: Exporter,
    /// Startup configuration, kept for handlers that grow settings later.
    #[allow(dead_code)]
    pub config: Config,
    /// Busy flag for the single in-flight generation call — the sole
    /// mutual-exclusion mechanism; form editing is never blocked by it.
    pub generation_busy: Arc<AtomicBool>,
}
