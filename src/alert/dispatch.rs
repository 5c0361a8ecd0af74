//! The alert scan: which receivers get notified when an emitter raises an
//! alert.
//!
//! The scan only decides; it produces a list of pending deliveries that the
//! caller pushes through each recipient's own connection channel. Delivery is
//! a non-blocking enqueue, so one stalled recipient cannot delay the rest.

use thiserror::Error;

use crate::geo;
use crate::participants::model::Role;
use crate::participants::store::{self, ParticipantRegistry};
use crate::ws::ConnectionSender;

/// Rejection reasons for an alert trigger. Both are client errors, raised
/// before any notification is sent.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no participant registered under identity \"{0}\"")]
    UnknownEmitter(String),
    #[error("participant \"{0}\" does not hold the emitter role")]
    NotAnEmitter(String),
}

/// A qualifying recipient produced by the scan, ready for delivery.
#[derive(Debug, Clone)]
pub struct PendingAlert {
    pub identity: String,
    /// Great-circle distance from the emitter, whole meters
    pub distance_m: u32,
    pub connection: ConnectionSender,
}

/// Scan the registry for receivers within `radius_m` of the emitter.
///
/// Full pass over every other participant, no ordering. A candidate is
/// skipped when its role is not receiver, when either side lacks coordinates,
/// when the distance is at or beyond the radius (strictly-closer qualifies),
/// or when it has no live connection handle. The emitter itself is never a
/// candidate, whatever its record looks like.
pub fn scan(
    registry: &ParticipantRegistry,
    radius_m: f64,
    emitter_identity: &str,
) -> Result<Vec<PendingAlert>, DispatchError> {
    let emitter = store::get(registry, emitter_identity)
        .ok_or_else(|| DispatchError::UnknownEmitter(emitter_identity.to_string()))?;
    if emitter.role != Some(Role::Emitter) {
        return Err(DispatchError::NotAnEmitter(emitter_identity.to_string()));
    }

    // An emitter that never reported a position matches nobody.
    let (Some(emitter_lat), Some(emitter_lon)) = (emitter.latitude, emitter.longitude) else {
        tracing::debug!(identity = %emitter_identity, "Emitter has no location, nobody to notify");
        return Ok(Vec::new());
    };

    let mut pending = Vec::new();
    for entry in registry.iter() {
        if entry.key() == emitter_identity {
            continue;
        }
        let candidate = entry.value();
        if candidate.role != Some(Role::Receiver) {
            continue;
        }
        let (Some(lat), Some(lon)) = (candidate.latitude, candidate.longitude) else {
            continue;
        };
        let distance_m = geo::haversine_distance_m(emitter_lat, emitter_lon, lat, lon);
        if f64::from(distance_m) >= radius_m {
            continue;
        }
        let Some(connection) = candidate.connection.clone() else {
            continue;
        };
        if connection.is_closed() {
            // Handle went stale between disconnect and cleanup.
            continue;
        }
        pending.push(PendingAlert {
            identity: entry.key().clone(),
            distance_m,
            connection,
        });
    }

    Ok(pending)
}
