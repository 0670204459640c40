//! Liveness and readiness endpoints.

use axum::Json;
use chrono::Utc;
use common::{DatabaseState, HealthResponse, ReadyResponse};

/// GET /health — always healthy while the process accepts connections.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(Utc::now()))
}

/// GET /ready — always ready; no dependency is probed.
pub async fn ready() -> Json<ReadyResponse> {
    Json(ReadyResponse::ready(DatabaseState::Connected, Utc::now()))
}
