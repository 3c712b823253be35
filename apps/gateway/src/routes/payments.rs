use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::models::CheckoutSessionRequest;
use crate::payments::PaymentError;
use crate::state::AppState;

const NOT_CONFIGURED: &str = "Payment service is not configured. Please contact support.";
const INVALID_REQUEST: &str = "Invalid payment request. Please check the payment details.";
const AUTH_FAILED: &str = "Payment service authentication failed. Please contact support.";
const SESSION_FAILED: &str = "Failed to create checkout session. Please try again.";

/// The payment surface keeps its own error shape so the web client's
/// checkout flow can branch on `success` alone.
fn payment_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "success": false, "message": message }))).into_response()
}

/// POST /api/payments
/// Malformed bodies and validation failures answer 400 and missing
/// credentials answer 500, all before any network attempt. Provider
/// failures always answer 500; the category only selects the user-facing
/// message.
pub async fn handle_create_checkout(
    State(state): State<AppState>,
    body: Result<Json<CheckoutSessionRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = body else {
        return payment_error(StatusCode::BAD_REQUEST, INVALID_REQUEST);
    };

    let order = match request.validate() {
        Ok(order) => order,
        Err(message) => return payment_error(StatusCode::BAD_REQUEST, &message),
    };

    let Some(stripe) = state.stripe.as_ref() else {
        error!("checkout requested but no payment credentials are configured");
        return payment_error(StatusCode::INTERNAL_SERVER_ERROR, NOT_CONFIGURED);
    };

    match stripe.create_checkout_session(&order).await {
        Ok(session) => Json(json!({
            "success": true,
            "sessionId": session.id,
            "url": session.url
        }))
        .into_response(),
        Err(err) => {
            error!("checkout session creation failed: {err}");
            let message = match &err {
                PaymentError::InvalidRequest { .. } => INVALID_REQUEST,
                PaymentError::Authentication { .. } => AUTH_FAILED,
                PaymentError::Http(_) | PaymentError::Provider { .. } => SESSION_FAILED,
            };
            payment_error(StatusCode::INTERNAL_SERVER_ERROR, message)
        }
    }
}

/// GET /api/payments/config
/// Hands the browser the publishable key it needs to start the provider's
/// client-side flow.
pub async fn handle_payment_config(State(state): State<AppState>) -> Response {
    match state.config.stripe_publishable_key.as_deref() {
        Some(key) => Json(json!({ "publishableKey": key })).into_response(),
        None => payment_error(StatusCode::INTERNAL_SERVER_ERROR, NOT_CONFIGURED),
    }
}
