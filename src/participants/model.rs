use serde::{Deserialize, Serialize};

use crate::ws::ConnectionSender;

/// Participant roles. A closed set: unknown role strings fail JSON
/// deserialization at the API boundary instead of being stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Permitted to trigger alerts.
    Emitter,
    /// Eligible to receive alerts.
    Receiver,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Emitter => "emitter",
            Self::Receiver => "receiver",
        }
    }
}

/// One tracked participant.
///
/// Created with profile fields only (first registration) or a connection
/// handle only (socket opened before registering); the two merge into one
/// record keyed by identity as both arrive.
#[derive(Debug, Clone, Default)]
pub struct Participant {
    pub display_name: Option<String>,
    pub role: Option<Role>,
    /// Decimal degrees; unset until first reported.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Live push channel for this identity. Set when a WebSocket binds it,
    /// cleared when that connection closes.
    pub connection: Option<ConnectionSender>,
}

/// Profile fields carried by a registration. Fields left `None` keep their
/// stored values; registration never carries a connection handle.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub role: Option<Role>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
