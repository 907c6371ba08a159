use std::sync::Arc;

use crate::application::services::ShortenService;

/// Shared state injected into every HTTP handler.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
}

impl AppState {
    pub fn new(shorten_service: Arc<ShortenService>) -> Self {
        Self { shorten_service }
    }
}
