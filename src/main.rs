/// Main application entry point
mod clients;
mod config;
mod datefmt;
mod domain;
mod errors;
mod filters;
mod handlers;
mod metrics;
mod report;
mod routes;
mod services;
mod store;

use crate::clients::{LaunchClient, LaunchpadClient};
use crate::config::AppConfig;
use crate::handlers::AppState;
use crate::routes::build_router;
use crate::services::{DashboardService, LaunchService};
use crate::store::LaunchStore;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env()?;
    info!("Configuration loaded successfully");

    // Initialize in-memory store
    let store = Arc::new(LaunchStore::new());

    // Initialize clients
    let launch_client = LaunchClient::new(config.spacex_api_url.clone(), config.page_limit)?;
    let launchpad_client = LaunchpadClient::new(config.spacex_api_url.clone())?;

    // Initialize services
    let launch_service = Arc::new(LaunchService::new(store.clone(), launch_client));
    let dashboard_service = Arc::new(DashboardService::new(store.clone(), launchpad_client));

    // Initialize application state
    let state = AppState {
        launch_service: launch_service.clone(),
        dashboard_service,
    };

    // Start background sync task
    start_background_sync(config.sync_every_seconds, launch_service);

    // Build router
    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("launch_dashboard service listening on {}", config.bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Start the periodic launch collection sync
fn start_background_sync(interval: u64, launch_service: Arc<LaunchService>) {
    tokio::spawn(async move {
        info!("Starting launch sync task (interval: {}s)", interval);
        loop {
            if let Err(e) = launch_service.sync().await {
                error!("Launch sync error: {:?}", e);
            }
            tokio::time::sleep(Duration::from_secs(interval)).await;
        }
    });
}
