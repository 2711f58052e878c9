//! Shared application state for the web server.

use std::sync::Arc;

use litmap_common::ServerConfig;
use litmap_dataset::Dataset;

/// Shared state injected into every Axum handler.
///
/// The publication table is loaded once at startup and read-only for the
/// process lifetime, so no locking is needed anywhere on the request path.
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub dataset: Arc<Dataset>,
}

impl AppState {
    pub fn new(config: ServerConfig, dataset: Arc<Dataset>) -> Self {
        Self { config, dataset }
    }
}

pub type SharedState = Arc<AppState>;
