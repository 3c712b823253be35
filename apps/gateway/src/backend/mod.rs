//! Clients for the two upstream services the gateway fronts: the
//! assistant backend (search, job detail, chat) and the jobs backend
//! (listing CRUD, saved jobs). All outbound HTTP goes through this module;
//! route handlers never touch `reqwest` directly.

pub mod assistant;
pub mod jobs;

pub use assistant::AssistantClient;
pub use jobs::JobsClient;

use serde_json::Value;
use thiserror::Error;

/// Failure of one outbound call. A received non-2xx keeps its status and
/// body so the normalizer can relay them; transport and decode failures
/// collapse to the fixed-500 channel.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned status {status}")]
    Api { status: u16, body: Value },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Decodes one upstream response. Non-2xx becomes `Api` with the body
/// preserved as JSON when it parses and as a raw string otherwise. Empty
/// 2xx bodies (DELETE-style upstreams) decode to `Value::Null`.
pub(crate) async fn read_json(response: reqwest::Response) -> Result<Value, BackendError> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
        return Err(BackendError::Api {
            status: status.as_u16(),
            body,
        });
    }

    let text = response.text().await?;
    if text.is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text)?)
}
