//! Outbound WebSocket events.
//!
//! The push protocol is one-way: the server emits JSON events and reads
//! nothing back (pings aside). Events are tagged by a "type" field.

use axum::extract::ws::Message;
use serde::Serialize;

use crate::ws::ConnectionSender;

/// Events pushed to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// An emitter raised an alert within range of this client.
    ProximityAlert {
        /// Great-circle distance from the emitter, whole meters
        distance: u32,
    },
}

/// Serialize an event and enqueue it on a connection's writer channel.
/// Returns false if the connection is gone. Nothing is awaited or retried.
pub fn send_event(sender: &ConnectionSender, event: &Event) -> bool {
    let json = match serde_json::to_string(event) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to serialize outbound event");
            return false;
        }
    };
    sender.send(Message::Text(json.into())).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proximity_alert_wire_format() {
        let event = Event::ProximityAlert { distance: 142 };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"proximity_alert","distance":142}"#);
    }

    #[test]
    fn test_send_event_reports_closed_channel() {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        drop(rx);
        assert!(!send_event(&tx, &Event::ProximityAlert { distance: 1 }));
    }
}
