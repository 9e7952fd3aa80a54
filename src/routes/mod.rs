/// Application routes configuration
use crate::handlers::{
    dashboard_metrics, health, latest_launches, launchpad_name, list_launches, refresh, report,
    upcoming_launches, AppState,
};
use axum::{routing::get, Router};

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Launch list
        .route("/launches", get(list_launches))
        .route("/launches/latest", get(latest_launches))
        .route("/launches/upcoming", get(upcoming_launches))
        // Dashboard
        .route("/dashboard/metrics", get(dashboard_metrics))
        // Name resolution
        .route("/launchpads/:id/name", get(launchpad_name))
        // Sync + export
        .route("/refresh", get(refresh))
        .route("/report", get(report))
        .with_state(state)
}
