//! Client for the assistant backend: job search, job detail lookup, the
//! conversational endpoint, and the reachability probe used by health
//! reporting.

use std::time::Duration;

use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::backend::{read_json, BackendError};
use crate::models::SearchQuery;

/// Upper bound on one chat round trip. The assistant composes answers
/// server-side and can be slow; the UI treats anything beyond this as
/// failed.
const CHAT_TIMEOUT: Duration = Duration::from_secs(30);

/// Upper bound on the reachability probe. Probes are best-effort and must
/// not stall the health endpoint.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for the assistant backend. Cheap to clone; the underlying
/// connection pool is shared.
#[derive(Clone)]
pub struct AssistantClient {
    http: Client,
    base_url: String,
}

impl AssistantClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::builder()
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }

    /// POST {base}/search with the validated query as JSON. The response
    /// envelope is returned untouched.
    pub async fn search(&self, query: &SearchQuery) -> Result<Value, BackendError> {
        let url = format!("{}/search", self.base_url);
        debug!("searching jobs via {url}");

        let response = self.http.post(&url).json(query).send().await?;
        read_json(response).await
    }

    /// GET {base}/job-details?url={job_url}. The posting URL arrives here
    /// already percent-decoded; reqwest re-encodes it as a query value.
    pub async fn job_detail(&self, job_url: &str) -> Result<Value, BackendError> {
        let url = format!("{}/job-details", self.base_url);
        debug!("fetching job detail for {job_url}");

        let response = self
            .http
            .get(&url)
            .query(&[("url", job_url)])
            .send()
            .await?;
        read_json(response).await
    }

    /// POST {base}/chat with `{"message": ...}`, capped at [`CHAT_TIMEOUT`].
    pub async fn chat(&self, message: &str) -> Result<Value, BackendError> {
        let url = format!("{}/chat", self.base_url);

        let response = self
            .http
            .post(&url)
            .timeout(CHAT_TIMEOUT)
            .json(&json!({ "message": message }))
            .send()
            .await?;
        read_json(response).await
    }

    /// One best-effort GET {base}/health. Any 2xx counts as reachable;
    /// failures are logged at debug and reported as unreachable, never
    /// propagated.
    pub async fn probe_health(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self
            .http
            .get(&url)
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                debug!("assistant backend probe failed: {err}");
                false
            }
        }
    }
}
