#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod router;
mod state;

use anyhow::Context;
use modeldeck_core::{AppConfig, UpstreamClient};
use state::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing logger
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,modeldeck_server=debug,modeldeck_core=debug".into()),
        )
        .with_target(false)
        .with_thread_ids(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting ModelDeck server");

    let config = Arc::new(AppConfig::load()?);
    let client = UpstreamClient::new(&config.upstream).context("Failed to build HTTP client")?;
    tracing::info!(upstream = %config.upstream.url, groups = config.groups.groups().len(), "Configuration loaded");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let root_path = config.server.root_path.clone();
    let app = router::build_router(AppState::new(config, Arc::new(client)));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("ModelDeck running on http://{}{}", addr, root_path);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Failed to start server")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("ModelDeck shutting down");
}
