//! HTTP handlers, one module per endpoint group.

pub mod geo;
pub mod health;
pub mod metrics;
pub mod status;

use axum::http::Uri;

use crate::config::Config;
use crate::error::ApiError;

/// Shared application state accessible from all handlers.
///
/// Resolved once at startup; handlers never read the process environment.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

/// Fallback for unknown paths and disabled endpoints.
pub async fn not_found(uri: Uri) -> ApiError {
    tracing::debug!(path = %uri.path(), "no matching route");
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
