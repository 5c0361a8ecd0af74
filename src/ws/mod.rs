pub mod actor;
pub mod handler;
pub mod protocol;

use tokio::sync::mpsc;

/// Type alias for the sender half of a WebSocket connection's channel.
/// Other parts of the system clone this out of the registry to push events to
/// a specific client.
pub type ConnectionSender = mpsc::UnboundedSender<axum::extract::ws::Message>;
