//! Health check handler

use crate::http::models::PingResponse;
use axum::Json;

/// GET /api/ping - Liveness probe
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok".to_string(),
    })
}
