//! Primary status endpoint consumed by the viewer.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use chrono::Utc;
use common::{DatabaseState, StatusReport};

use super::AppState;

/// GET /api/status — returns a fresh [`StatusReport`] for the configured environment.
#[tracing::instrument(skip(state), fields(environment = %state.config.environment))]
pub async fn get(State(state): State<Arc<AppState>>) -> Json<StatusReport> {
    // No connectivity check is performed.
    let database = DatabaseState::Connected;
    Json(StatusReport::new(
        state.config.environment.as_str(),
        database,
        Utc::now(),
    ))
}
