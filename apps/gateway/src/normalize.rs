//! Failure normalization for proxied calls. Each wrapper turns a
//! [`BackendError`] into the stable JSON shape its route promises: a
//! received upstream status is relayed as-is with the upstream body under
//! `details`, while transport and decode failures collapse to 500. The
//! search and job-detail flavors additionally merge in a renderable
//! default payload so clients never branch on missing fields.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::error;

use crate::backend::BackendError;
use crate::models::{JobDetail, SearchResponse};

const SEARCH_ERROR: &str = "Failed to search jobs";
const JOB_DETAIL_ERROR: &str = "Failed to fetch job details";

/// Splits one failed call into the status to answer with and the detail
/// payload to attach. Transport and decode failures carry their error
/// text as a plain string.
fn failure_parts(err: &BackendError) -> (StatusCode, Value) {
    match err {
        BackendError::Api { status, body } => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body.clone(),
        ),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Value::String(other.to_string()),
        ),
    }
}

/// The assistant backend reports errors as `{"detail": "..."}`; pull that
/// message out when it is present.
fn upstream_detail(details: &Value) -> Option<&str> {
    details.get("detail").and_then(Value::as_str)
}

/// Plain proxy failure for chat and the jobs CRUD surface: `{"error": msg}`
/// under the relayed status. The upstream's own detail message wins over
/// the route's fixed fallback when one exists.
pub struct ProxyFailure {
    error: BackendError,
    fallback: &'static str,
}

impl ProxyFailure {
    pub fn new(error: BackendError, fallback: &'static str) -> Self {
        Self { error, fallback }
    }
}

impl IntoResponse for ProxyFailure {
    fn into_response(self) -> Response {
        error!("proxied call failed: {}", self.error);
        let (status, details) = failure_parts(&self.error);
        let message = upstream_detail(&details).unwrap_or(self.fallback);
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[derive(Serialize)]
struct SearchErrorBody {
    error: &'static str,
    details: Value,
    #[serde(flatten)]
    defaults: SearchResponse,
}

/// Failed search: relayed status plus the zeroed result envelope, so the
/// caller renders an empty result list instead of branching on an error
/// shape.
pub struct SearchFailure(pub BackendError);

impl IntoResponse for SearchFailure {
    fn into_response(self) -> Response {
        error!("job search failed: {}", self.0);
        let (status, details) = failure_parts(&self.0);
        let body = SearchErrorBody {
            error: SEARCH_ERROR,
            details,
            defaults: SearchResponse::default(),
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Serialize)]
struct JobDetailErrorBody {
    error: &'static str,
    details: Value,
    #[serde(flatten)]
    placeholder: JobDetail,
}

/// Failed job-detail fetch: relayed status plus the placeholder card.
pub struct JobDetailFailure(pub BackendError);

impl IntoResponse for JobDetailFailure {
    fn into_response(self) -> Response {
        error!("job detail fetch failed: {}", self.0);
        let (status, details) = failure_parts(&self.0);
        let body = JobDetailErrorBody {
            error: JOB_DETAIL_ERROR,
            details,
            placeholder: JobDetail::unavailable(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn api_error(status: u16, body: Value) -> BackendError {
        BackendError::Api { status, body }
    }

    /// Decode failures exercise the non-Api arm without needing a live
    /// socket.
    fn decode_error() -> BackendError {
        BackendError::Parse(serde_json::from_str::<Value>("not json").unwrap_err())
    }

    #[tokio::test]
    async fn test_proxy_failure_relays_status_and_upstream_detail() {
        let failure = ProxyFailure::new(
            api_error(503, json!({ "detail": "assistant overloaded" })),
            "Failed to get a response",
        );
        let response = failure.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": "assistant overloaded" }));
    }

    #[tokio::test]
    async fn test_proxy_failure_uses_fallback_without_upstream_detail() {
        let response = ProxyFailure::new(decode_error(), "Failed to fetch jobs").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": "Failed to fetch jobs" }));
    }

    #[tokio::test]
    async fn test_search_failure_merges_zeroed_defaults() {
        let response =
            SearchFailure(api_error(502, json!({ "detail": "offline" }))).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Failed to search jobs");
        assert_eq!(body["details"], json!({ "detail": "offline" }));
        assert_eq!(body["results"], json!([]));
        assert_eq!(body["total_results"], 0);
        assert_eq!(body["query_time_ms"], 0);
        assert_eq!(body["women_friendly_count"], 0);
    }

    #[tokio::test]
    async fn test_search_transport_failure_answers_500_with_defaults() {
        let response = SearchFailure(decode_error()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["results"], json!([]));
        assert!(body["details"].is_string());
    }

    #[tokio::test]
    async fn test_job_detail_failure_ships_placeholder_card() {
        let response =
            JobDetailFailure(api_error(404, json!({ "detail": "unknown job" }))).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Failed to fetch job details");
        assert_eq!(body["title"], "Job Details Unavailable");
        assert_eq!(body["company"], "Unknown");
        assert_eq!(body["application_url"], "#");
    }

    #[tokio::test]
    async fn test_unmappable_upstream_status_collapses_to_500() {
        let response = SearchFailure(api_error(99, Value::Null)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
