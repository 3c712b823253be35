use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::normalize::ProxyFailure;
use crate::state::AppState;

const CHAT_FALLBACK_ERROR: &str = "Failed to get a response from the assistant";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// POST /api/chat
/// Relays one user message to the assistant backend and passes the reply
/// through untouched. The upstream call is capped at 30 seconds.
pub async fn handle_chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = body else {
        return AppError::invalid_body().into_response();
    };

    let message = request
        .message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty());
    let Some(message) = message else {
        return AppError::Validation("Message is required".to_string()).into_response();
    };

    match state.assistant.chat(message).await {
        Ok(reply) => Json(reply).into_response(),
        Err(err) => ProxyFailure::new(err, CHAT_FALLBACK_ERROR).into_response(),
    }
}
