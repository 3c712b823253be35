use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;

use crate::models::HealthReport;
use crate::state::AppState;

/// GET /api/health
/// Always 200; the body's `status` field reports ok or degraded based on
/// one best-effort probe of the assistant backend.
pub async fn handle_health(State(state): State<AppState>) -> Json<HealthReport> {
    let reachable = state.assistant.probe_health().await;
    Json(HealthReport::current(reachable))
}

/// HEAD /api/health
/// Cheap liveness for load balancers: no backend probe, empty body, the
/// liveness marker and current timestamp carried in headers instead.
pub async fn handle_health_head() -> Response {
    (
        StatusCode::OK,
        [
            ("x-health", "ok".to_string()),
            ("x-timestamp", Utc::now().to_rfc3339()),
        ],
    )
        .into_response()
}
