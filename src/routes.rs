use axum::Router;

use crate::alert::trigger;
use crate::participants::registration;
use crate::state::AppState;
use crate::ws::handler as ws_handler;

/// Build the full axum Router with all routes.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/api/register",
            axum::routing::post(registration::register),
        )
        .route(
            "/api/participants",
            axum::routing::get(registration::list_participants),
        )
        .route("/api/alert", axum::routing::post(trigger::trigger_alert));

    // WebSocket endpoint (identity via query param)
    let ws_routes = Router::new().route("/ws", axum::routing::get(ws_handler::ws_upgrade));

    // Health check
    let health = Router::new().route("/health", axum::routing::get(health_check));

    Router::new()
        .merge(api_routes)
        .merge(ws_routes)
        .merge(health)
        .with_state(state)
}

/// Basic health check endpoint
async fn health_check() -> &'static str {
    "ok"
}
