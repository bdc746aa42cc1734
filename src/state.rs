//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::ListingService;
use crate::config::Config;

/// State shared by all handlers. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub listing_service: Arc<ListingService>,
}

impl AppState {
    pub fn new(listing_service: Arc<ListingService>) -> Self {
        Self { listing_service }
    }

    /// Builds state from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(ListingService::new(
            config.sanitize_limits(),
            config.preview_tag_count,
        )))
    }
}
