//! Application state for the web layer.

use std::sync::Arc;

use crate::advisory::LiveStatusAdvisor;
use crate::directory::{FeedbackStore, StationDirectory};

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Lines, stations and exit coaches
    pub directory: StationDirectory,

    /// Station feedback log
    pub feedback: FeedbackStore,

    /// Live status advisor
    pub advisor: Arc<LiveStatusAdvisor>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        directory: StationDirectory,
        feedback: FeedbackStore,
        advisor: LiveStatusAdvisor,
    ) -> Self {
        Self {
            directory,
            feedback,
            advisor: Arc::new(advisor),
        }
    }
}
