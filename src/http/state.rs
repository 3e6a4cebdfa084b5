use crate::captions::CaptionsProvider;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Captions source consulted once per transcript request
    pub provider: Arc<dyn CaptionsProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn CaptionsProvider>) -> Self {
        Self { provider }
    }
}
