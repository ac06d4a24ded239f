// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::authenticator::MockAuthenticator;
use crate::application::dashboard_service::DashboardService;
use crate::application::session_store::SessionStore;
use crate::application::state_repository::StateRepository;
use crate::application::theme_store::ThemeStore;
use crate::infrastructure::config::{StorageBackend, load_app_config};
use crate::infrastructure::file_repository::FileStateRepository;
use crate::infrastructure::memory_repository::MemoryStateRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Create repository (infrastructure layer)
    let repository: Arc<dyn StateRepository> = match config.storage.backend {
        StorageBackend::File => {
            let repository = FileStateRepository::new(config.storage.dir.clone());
            tracing::info!(dir = %repository.dir().display(), "Using file-backed state storage");
            Arc::new(repository)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory state storage, nothing survives a restart");
            Arc::new(MemoryStateRepository::new())
        }
    };

    // Hydrate stores (application layer)
    let session = SessionStore::load(
        repository.clone(),
        Arc::new(MockAuthenticator),
        config.storage.session_key.clone(),
    )
    .await?;
    let theme = ThemeStore::load(repository, config.storage.theme_key.clone()).await?;

    let state = Arc::new(AppState {
        session,
        theme,
        dashboards: DashboardService::new(),
    });

    // Build router (presentation layer)
    let app = router(state);

    // Start server
    let addr: SocketAddr = config.server.bind.parse()?;
    tracing::info!(%addr, "Starting slate-dashboard service");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
