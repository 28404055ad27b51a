use modeldeck_core::{AppConfig, ModelSource};
use std::sync::Arc;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub source: Arc<dyn ModelSource>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, source: Arc<dyn ModelSource>) -> Self {
        Self { config, source }
    }
}
