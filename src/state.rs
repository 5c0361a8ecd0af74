use crate::participants::store::ParticipantRegistry;

/// Shared application state passed to all handlers via axum State extractor.
#[derive(Clone)]
pub struct AppState {
    /// All tracked participants, keyed by caller-supplied identity
    pub registry: ParticipantRegistry,
    /// Alert radius in meters; recipients strictly closer than this qualify
    pub alert_radius_m: f64,
}
