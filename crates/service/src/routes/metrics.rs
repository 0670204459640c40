//! Prometheus metrics endpoint.
//!
//! The exposition body is literal; nothing is measured.

use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Exposition body served verbatim by `GET /metrics`.
pub const METRICS_BODY: &str = r#"# HELP http_requests_total Total number of HTTP requests
# TYPE http_requests_total counter
http_requests_total{method="GET",route="/health"} 42
http_requests_total{method="GET",route="/api/status"} 123

# HELP app_info Application information
# TYPE app_info gauge
app_info{version="1.0.0",service="kv-infosys-backend"} 1"#;

/// GET /metrics — returns Prometheus-formatted metrics.
pub async fn get() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        METRICS_BODY,
    )
}
