//! Checkout-session client for the payment provider (Stripe). The
//! gateway's only payment responsibility is creating a hosted Checkout
//! session and handing its URL back to the browser; webhooks and session
//! lifecycle stay with the provider.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::models::CheckoutOrder;

const STRIPE_API_BASE: &str = "https://api.stripe.com";

/// Failure of one session-creation call, split by what the caller can do
/// about it. All variants surface to the client as a 500; the split only
/// selects the user-facing message and the log line.
#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider rejected the request: {message}")]
    InvalidRequest { message: String },

    #[error("provider authentication failed: {message}")]
    Authentication { message: String },

    #[error("provider error (status {status}): {message}")]
    Provider { status: u16, message: String },
}

/// Created Checkout session. `url` is the hosted payment page the browser
/// is redirected to.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderError,
}

/// The provider's error envelope: `{"error": {"type": ..., "message": ...}}`.
#[derive(Debug, Deserialize)]
struct ProviderError {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    message: String,
}

/// Client for the provider's REST API, authenticated with the secret key.
#[derive(Clone)]
pub struct StripeClient {
    http: Client,
    api_base: String,
    secret_key: String,
}

impl StripeClient {
    pub fn new(secret_key: String) -> Self {
        Self::with_api_base(secret_key, STRIPE_API_BASE.to_string())
    }

    /// Points the client at a different API base; tests run against a
    /// local stub this way.
    pub fn with_api_base(secret_key: String, api_base: String) -> Self {
        Self {
            http: Client::builder()
                .build()
                .expect("Failed to build HTTP client"),
            api_base,
            secret_key,
        }
    }

    /// POST {base}/v1/checkout/sessions with one payment-mode line item.
    /// `order.unit_amount()` carries the only major-to-minor conversion in
    /// the codebase.
    pub async fn create_checkout_session(
        &self,
        order: &CheckoutOrder,
    ) -> Result<CheckoutSession, PaymentError> {
        let url = format!("{}/v1/checkout/sessions", self.api_base);
        let params = checkout_form(order);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(classify_provider_error(status.as_u16(), &text));
        }

        let session = response.json::<CheckoutSession>().await?;
        debug!("created checkout session {}", session.id);
        Ok(session)
    }
}

/// Form parameters for session creation, in the provider's bracketed
/// nested-key encoding.
fn checkout_form(order: &CheckoutOrder) -> Vec<(&'static str, String)> {
    vec![
        ("mode", "payment".to_string()),
        (
            "line_items[0][price_data][currency]",
            order.currency.clone(),
        ),
        (
            "line_items[0][price_data][product_data][name]",
            order.description.clone(),
        ),
        (
            "line_items[0][price_data][unit_amount]",
            order.unit_amount().to_string(),
        ),
        ("line_items[0][quantity]", "1".to_string()),
        ("success_url", order.success_url.clone()),
        ("cancel_url", order.cancel_url.clone()),
    ]
}

/// Maps the provider's error envelope onto the categories the gateway
/// reports distinctly. Unparseable bodies keep their raw text as the
/// message.
fn classify_provider_error(status: u16, body: &str) -> PaymentError {
    let parsed = serde_json::from_str::<ProviderErrorBody>(body).ok();
    let (kind, message) = match parsed {
        Some(envelope) => {
            let message = if envelope.error.message.is_empty() {
                body.to_string()
            } else {
                envelope.error.message
            };
            (envelope.error.kind, message)
        }
        None => (String::new(), body.to_string()),
    };

    match kind.as_str() {
        "invalid_request_error" => PaymentError::InvalidRequest { message },
        "authentication_error" => PaymentError::Authentication { message },
        _ => PaymentError::Provider { status, message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn order() -> CheckoutOrder {
        CheckoutOrder {
            amount_major: 25,
            currency: "usd".to_string(),
            description: "Thrive premium membership".to_string(),
            success_url: "https://thrive.example/success".to_string(),
            cancel_url: "https://thrive.example/cancel".to_string(),
        }
    }

    #[test]
    fn test_checkout_form_converts_major_units_once() {
        let params = checkout_form(&order());
        let unit_amount = params
            .iter()
            .find(|(k, _)| *k == "line_items[0][price_data][unit_amount]")
            .map(|(_, v)| v.as_str());
        assert_eq!(unit_amount, Some("2500"));
    }

    #[test]
    fn test_checkout_form_is_a_single_payment_line_item() {
        let params = checkout_form(&order());
        assert!(params.contains(&("mode", "payment".to_string())));
        assert!(params.contains(&("line_items[0][quantity]", "1".to_string())));
        assert!(!params.iter().any(|(k, _)| k.starts_with("line_items[1]")));
    }

    #[test]
    fn test_classify_maps_provider_error_types() {
        let invalid = classify_provider_error(
            400,
            r#"{"error":{"type":"invalid_request_error","message":"Invalid currency"}}"#,
        );
        assert!(matches!(
            invalid,
            PaymentError::InvalidRequest { ref message } if message == "Invalid currency"
        ));

        let auth = classify_provider_error(
            401,
            r#"{"error":{"type":"authentication_error","message":"Invalid API key"}}"#,
        );
        assert!(matches!(auth, PaymentError::Authentication { .. }));

        let other = classify_provider_error(
            500,
            r#"{"error":{"type":"api_error","message":"boom"}}"#,
        );
        assert!(matches!(
            other,
            PaymentError::Provider { status: 500, .. }
        ));
    }

    #[test]
    fn test_classify_keeps_unparseable_body_as_message() {
        let err = classify_provider_error(502, "Bad Gateway");
        assert!(matches!(
            err,
            PaymentError::Provider { status: 502, ref message } if message == "Bad Gateway"
        ));
    }

    #[tokio::test]
    async fn test_create_checkout_session_round_trip() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/checkout/sessions")
            .match_header("authorization", "Bearer sk_test_secret")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("mode".to_string(), "payment".to_string()),
                Matcher::UrlEncoded(
                    "line_items[0][price_data][unit_amount]".to_string(),
                    "2500".to_string(),
                ),
                Matcher::UrlEncoded(
                    "success_url".to_string(),
                    "https://thrive.example/success".to_string(),
                ),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"id":"cs_test_abc123","url":"https://checkout.stripe.test/c/pay/cs_test_abc123"}"#,
            )
            .create_async()
            .await;

        let client = StripeClient::with_api_base("sk_test_secret".to_string(), server.url());
        let session = client.create_checkout_session(&order()).await.unwrap();

        assert_eq!(session.id, "cs_test_abc123");
        assert!(session.url.starts_with("https://checkout.stripe.test/"));
        mock.assert_async().await;
    }
}
