//! Integration tests for participant registration and profile merge semantics.

use serde_json::json;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use siren_server::participants::store;
use siren_server::routes;
use siren_server::state::AppState;

/// Helper: start the server on a random port and return (base_url, addr).
async fn start_test_server() -> (String, SocketAddr) {
    let state = AppState {
        registry: store::new_registry(),
        alert_radius_m: 200.0,
    };

    let app = routes::build_router(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), addr)
}

#[tokio::test]
async fn test_register_acknowledges_identity() {
    let (base_url, _addr) = start_test_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/register", base_url))
        .json(&json!({
            "identity": "amb-1",
            "display_name": "Unit 7",
            "role": "emitter",
            "latitude": 52.52,
            "longitude": 13.405,
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["identity"], "amb-1");
}

#[tokio::test]
async fn test_reregistration_preserves_omitted_coordinates() {
    let (base_url, _addr) = start_test_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/register", base_url))
        .json(&json!({
            "identity": "car-1",
            "role": "receiver",
            "latitude": 1.5,
            "longitude": 2.5,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    // Re-register with a changed role and no coordinates.
    let resp = client
        .post(format!("{}/api/register", base_url))
        .json(&json!({
            "identity": "car-1",
            "role": "emitter",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let participants: serde_json::Value = client
        .get(format!("{}/api/participants", base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let entry = participants
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["identity"] == "car-1")
        .expect("car-1 should be listed");

    assert_eq!(entry["role"], "emitter");
    assert_eq!(entry["latitude"], 1.5);
    assert_eq!(entry["longitude"], 2.5);
    assert_eq!(entry["connected"], false);
}

#[tokio::test]
async fn test_unknown_role_is_rejected() {
    let (base_url, _addr) = start_test_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/register", base_url))
        .json(&json!({
            "identity": "ped-1",
            "role": "pedestrian",
        }))
        .send()
        .await
        .unwrap();

    assert!(
        resp.status().is_client_error(),
        "unknown role must be rejected, got {}",
        resp.status()
    );

    // Nothing was stored.
    let participants: serde_json::Value = client
        .get(format!("{}/api/participants", base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(participants.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_identity_is_rejected() {
    let (base_url, _addr) = start_test_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/register", base_url))
        .json(&json!({
            "identity": "  ",
            "role": "receiver",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_health_check() {
    let (base_url, _addr) = start_test_server().await;

    let resp = reqwest::get(format!("{}/health", base_url)).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "ok");
}
