//! Application state management
//!
//! The engine is stateless, so the only shared state is the configuration.

use crate::config::AppConfig;
use std::sync::Arc;

/// Shared application state
///
/// Cloned into every handler; cloning is an `Arc` increment.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
