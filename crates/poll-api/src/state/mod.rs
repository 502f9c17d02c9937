//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context, configuration, and compiled templates.

use std::sync::Arc;

use poll_common::{AppConfig, AppError};
use poll_service::ServiceContext;

use crate::views::Views;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    /// HTML templates
    views: Arc<Views>,
}

impl AppState {
    /// Create a new AppState, compiling the page templates
    ///
    /// # Errors
    /// Returns `AppError::Template` if a built-in template does not parse
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Result<Self, AppError> {
        let views = Views::new().map_err(|e| AppError::Template(e.to_string()))?;

        Ok(Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            views: Arc::new(views),
        })
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the HTML views
    pub fn views(&self) -> &Views {
        &self.views
    }

    /// Number of questions shown on the index
    pub fn index_limit(&self) -> i64 {
        self.config.polls.index_limit
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .field("views", &"Views")
            .finish()
    }
}
