use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::alert::dispatch;
use crate::state::AppState;
use crate::ws::protocol::{self, Event};

#[derive(Debug, Deserialize)]
pub struct AlertRequest {
    /// Identity of the emitter raising the alert
    pub identity: String,
}

#[derive(Debug, Serialize)]
pub struct AlertResponse {
    /// Identities an alert was pushed to, in no particular order
    pub notified: Vec<String>,
}

/// POST /api/alert — trigger a proximity alert from an emitter.
///
/// Scans the registry and pushes a `proximity_alert` event to every receiver
/// in radius with a live connection. Delivery is fire-and-forget: each event
/// is enqueued onto that connection's writer task, never awaited, never
/// retried.
pub async fn trigger_alert(
    State(state): State<AppState>,
    Json(req): Json<AlertRequest>,
) -> Result<Json<AlertResponse>, (StatusCode, String)> {
    let pending = dispatch::scan(&state.registry, state.alert_radius_m, &req.identity)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let mut notified = Vec::with_capacity(pending.len());
    for alert in pending {
        let event = Event::ProximityAlert {
            distance: alert.distance_m,
        };
        if protocol::send_event(&alert.connection, &event) {
            notified.push(alert.identity);
        } else {
            tracing::debug!(
                identity = %alert.identity,
                "Recipient connection closed before delivery"
            );
        }
    }

    tracing::info!(
        emitter = %req.identity,
        notified = notified.len(),
        "Alert dispatched"
    );

    Ok(Json(AlertResponse { notified }))
}
