//! HTTP status service with liveness, readiness and status endpoints.
//!
//! Every response is a fixed-shape payload stamped with the current time;
//! no request touches shared mutable state or an external dependency.

pub mod config;
pub mod error;
pub mod routes;
pub mod service;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::{Config, Endpoints};
pub use error::{ApiError, ConfigError, ServiceError};
pub use routes::AppState;
pub use service::{RunningService, StatusService};

/// Creates the Axum application router for the endpoints enabled in the configuration.
pub fn create_app(state: Arc<AppState>) -> Router {
    let endpoints = state.config.endpoints;

    let mut router: Router<Arc<AppState>> = Router::new()
        .route("/health", get(routes::health::check))
        .route("/api/status", get(routes::status::get));

    if endpoints.ready {
        router = router.route("/ready", get(routes::health::ready));
    }
    if endpoints.geo {
        router = router.route("/api/geo/info", get(routes::geo::info));
    }
    if endpoints.metrics {
        router = router.route("/metrics", get(routes::metrics::get));
    }

    router
        .fallback(routes::not_found)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
