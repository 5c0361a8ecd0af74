use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::participants::model::{ProfileUpdate, Role};
use crate::participants::store;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Caller-supplied unique key, stable across reconnections
    pub identity: String,
    #[serde(default)]
    pub display_name: Option<String>,
    /// One of "emitter" | "receiver"; anything else is rejected
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub identity: String,
}

/// POST /api/register
/// Create or refresh a participant profile. Merge semantics: omitted fields
/// keep their stored values, and a connection handle bound earlier survives
/// re-registration untouched.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, (StatusCode, String)> {
    if req.identity.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Identity cannot be empty".to_string(),
        ));
    }

    store::upsert(
        &state.registry,
        &req.identity,
        ProfileUpdate {
            display_name: req.display_name,
            role: req.role,
            latitude: req.latitude,
            longitude: req.longitude,
        },
    );

    tracing::info!(
        identity = %req.identity,
        role = req.role.map(|r| r.as_str()).unwrap_or("-"),
        "Participant registered"
    );

    Ok(Json(RegisterResponse {
        identity: req.identity,
    }))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ParticipantEntry {
    pub identity: String,
    pub display_name: Option<String>,
    pub role: Option<Role>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Whether a live connection handle is currently bound
    pub connected: bool,
}

/// GET /api/participants — snapshot of all tracked participants.
pub async fn list_participants(State(state): State<AppState>) -> Json<Vec<ParticipantEntry>> {
    let entries: Vec<ParticipantEntry> = state
        .registry
        .iter()
        .map(|entry| {
            let p = entry.value();
            ParticipantEntry {
                identity: entry.key().clone(),
                display_name: p.display_name.clone(),
                role: p.role,
                latitude: p.latitude,
                longitude: p.longitude,
                connected: p.connection.as_ref().is_some_and(|c| !c.is_closed()),
            }
        })
        .collect();

    Json(entries)
}
