use std::sync::Arc;

use crate::config::Config;
use crate::models::Profile;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup, never mutated.
    pub profile: Arc<Profile>,
    pub config: Config,
}
