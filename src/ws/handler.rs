use axum::{
    extract::{
        ws::{WebSocket, WebSocketUpgrade},
        Query, State,
    },
    response::Response,
};
use serde::Deserialize;

use crate::state::AppState;
use crate::ws::actor;

/// Query parameters for WebSocket connection.
/// The identity correlates this socket with a participant record. Without it
/// the socket stays open but is never bound, so it can receive no alerts.
#[derive(Debug, Deserialize)]
pub struct WsConnectQuery {
    #[serde(default)]
    pub identity: Option<String>,
}

/// GET /ws?identity=...
/// WebSocket upgrade endpoint. Spawns an actor for the connection; the actor
/// binds the push channel into the registry when an identity was supplied.
pub async fn ws_upgrade(
    State(state): State<AppState>,
    Query(params): Query<WsConnectQuery>,
    ws: WebSocketUpgrade,
) -> Response {
    let identity = params.identity.filter(|id| !id.trim().is_empty());

    match &identity {
        Some(id) => {
            tracing::info!(identity = %id, "WebSocket connection accepted");
        }
        None => {
            tracing::warn!("WebSocket connection without identity, inert for dispatch");
        }
    }

    ws.on_upgrade(move |socket| handle_socket(socket, state, identity))
}

/// Hand the upgraded socket to its actor.
async fn handle_socket(socket: WebSocket, state: AppState, identity: Option<String>) {
    actor::run_connection(socket, state, identity).await;
}
