//! In-memory participant registry.
//!
//! A DashMap keyed by caller-supplied identity. Per-key entry locks serialize
//! concurrent updates to the same record (last writer wins per field); updates
//! to different identities never contend. Records are never deleted:
//! disconnecting only clears the connection handle.

use dashmap::DashMap;
use std::sync::Arc;

use crate::participants::model::{Participant, ProfileUpdate};
use crate::ws::ConnectionSender;

/// Participant registry: one record per identity.
pub type ParticipantRegistry = Arc<DashMap<String, Participant>>;

/// Create a new empty participant registry.
pub fn new_registry() -> ParticipantRegistry {
    Arc::new(DashMap::new())
}

/// Create-or-merge a participant profile.
///
/// Only fields present in `update` overwrite stored values. The connection
/// handle is untouched: registration never supplies one, only
/// [`bind_connection`] does.
pub fn upsert(registry: &ParticipantRegistry, identity: &str, update: ProfileUpdate) {
    let mut entry = registry.entry(identity.to_string()).or_default();
    if let Some(display_name) = update.display_name {
        entry.display_name = Some(display_name);
    }
    if let Some(role) = update.role {
        entry.role = Some(role);
    }
    if let Some(latitude) = update.latitude {
        entry.latitude = Some(latitude);
    }
    if let Some(longitude) = update.longitude {
        entry.longitude = Some(longitude);
    }
}

/// Bind a live connection sender to an identity, creating a bare record if
/// the participant has not registered yet. A new connection replaces any
/// previous handle for the same identity.
pub fn bind_connection(registry: &ParticipantRegistry, identity: &str, sender: ConnectionSender) {
    registry.entry(identity.to_string()).or_default().connection = Some(sender);

    tracing::debug!(identity = %identity, "Connection bound");
}

/// Clear the stored connection handle, but only if it still belongs to the
/// same channel as `sender`. A reconnect may already have bound a fresh
/// handle; that one must survive the old actor's cleanup.
pub fn clear_connection(registry: &ParticipantRegistry, identity: &str, sender: &ConnectionSender) {
    if let Some(mut entry) = registry.get_mut(identity) {
        if entry
            .connection
            .as_ref()
            .is_some_and(|current| current.same_channel(sender))
        {
            entry.connection = None;
            tracing::debug!(identity = %identity, "Connection cleared");
        }
    }
}

/// Snapshot one participant record.
pub fn get(registry: &ParticipantRegistry, identity: &str) -> Option<Participant> {
    registry.get(identity).map(|entry| entry.value().clone())
}
