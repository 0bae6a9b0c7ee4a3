//! Application state for the compliance notification engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::TrackerConfig;

/// Shared application state.
///
/// Contains the runtime configuration shared across all request handlers
/// and the scheduled job.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The loaded tracker configuration.
    config: Arc<TrackerConfig>,
}

impl AppState {
    /// Creates a new application state with the given configuration.
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the tracker configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }
}
