//! Application state for the REST API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the [`RestApi`] collaborator and the server configuration.

use std::path::Path;
use std::sync::Arc;

use crate::api::RestApi;
use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `A` - The engine behind the resources (must implement [`RestApi`])
///
/// # Example
///
/// ```rust,ignore
/// use rotkehlchen_rest::{AppState, ServerConfig};
/// use std::sync::Arc;
///
/// let state = AppState::new(Arc::new(engine), ServerConfig::default());
/// ```
pub struct AppState<A> {
    /// The collaborator every resource forwards to.
    api: Arc<A>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// A is behind an Arc and need not be Clone
impl<A> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            config: Arc::clone(&self.config),
        }
    }
}

impl<A: RestApi> AppState<A> {
    /// Creates a new AppState with the given collaborator and configuration.
    pub fn new(api: Arc<A>, config: ServerConfig) -> Self {
        Self {
            api,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the collaborator.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the parent directory for upload temp dirs, if configured.
    pub fn upload_dir(&self) -> Option<&Path> {
        self.config.upload_dir.as_deref()
    }
}
