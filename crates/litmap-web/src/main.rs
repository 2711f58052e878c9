//! litmap Web Server
//!
//! Run with: cargo run -p litmap-web

use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use litmap_common::ServerConfig;
use litmap_dataset::Dataset;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ServerConfig::from_env_or_default()?;
    info!("Starting litmap explorer...");

    // The dashboard has no other data source: a missing or invalid artifact
    // is unrecoverable, so fail fast before binding the server.
    let dataset = Dataset::global(&config.dataset_path).await?;

    let state = litmap_web::state::AppState::new(config.clone(), dataset);
    let app = litmap_web::router::build_router(state);

    let addr: SocketAddr = config.bind_addr.parse()?;
    info!("🚀 Server listening on http://{}", addr);
    info!("📈 Open your browser and navigate to http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
