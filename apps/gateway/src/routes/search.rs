use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::errors::AppError;
use crate::models::SearchQuery;
use crate::normalize::SearchFailure;
use crate::state::AppState;

/// POST /api/search
/// Validates the query, bounds max_results, forwards to the assistant
/// backend, and relays the result envelope untouched.
pub async fn handle_search(
    State(state): State<AppState>,
    body: Result<Json<SearchQuery>, JsonRejection>,
) -> Response {
    let Ok(Json(mut query)) = body else {
        return AppError::invalid_body().into_response();
    };

    if query.query_text().is_none() {
        return AppError::Validation("Query is required".to_string()).into_response();
    }
    query.clamp_max_results();

    match state.assistant.search(&query).await {
        Ok(results) => Json(results).into_response(),
        Err(err) => SearchFailure(err).into_response(),
    }
}

/// GET /api/search
/// Search is POST-only; answer with usage instead of a bare 405 so the
/// mistake explains itself. No upstream call is made.
pub async fn handle_search_usage() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({
            "error": "Method not allowed. Use POST with a JSON body to search jobs.",
            "example": {
                "query": "software engineer",
                "location": "Remote",
                "max_results": 10,
                "women_friendly_only": true
            }
        })),
    )
        .into_response()
}
