use axum::Json;
use common::GeoInfo;

/// GET /api/geo/info — static description of the geo API.
pub async fn info() -> Json<GeoInfo> {
    Json(GeoInfo::default())
}
