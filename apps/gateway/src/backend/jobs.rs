//! Client for the jobs backend: listing CRUD plus the saved-jobs
//! endpoints. The gateway adds validation and response normalization;
//! ownership of the data stays upstream.

use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::backend::{read_json, BackendError};
use crate::models::{JobCreate, JobUpdate};

/// HTTP client for the jobs backend. Cheap to clone; the underlying
/// connection pool is shared.
#[derive(Clone)]
pub struct JobsClient {
    http: Client,
    base_url: String,
}

impl JobsClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::builder()
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }

    /// GET {base}/jobs, forwarding the caller's query string verbatim so
    /// upstream filter names never have to be mirrored here.
    pub async fn list_jobs(&self, raw_query: Option<&str>) -> Result<Value, BackendError> {
        let mut url = format!("{}/jobs", self.base_url);
        if let Some(query) = raw_query.filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(query);
        }
        debug!("listing jobs via {url}");

        let response = self.http.get(&url).send().await?;
        read_json(response).await
    }

    /// POST {base}/jobs with a validated listing.
    pub async fn create_job(&self, job: &JobCreate) -> Result<Value, BackendError> {
        let url = format!("{}/jobs", self.base_url);
        let response = self.http.post(&url).json(job).send().await?;
        read_json(response).await
    }

    /// GET {base}/jobs/{id}.
    pub async fn get_job(&self, id: &str) -> Result<Value, BackendError> {
        let url = format!("{}/jobs/{id}", self.base_url);
        let response = self.http.get(&url).send().await?;
        read_json(response).await
    }

    /// PUT {base}/jobs/{id} with a partial update.
    pub async fn update_job(&self, id: &str, patch: &JobUpdate) -> Result<Value, BackendError> {
        let url = format!("{}/jobs/{id}", self.base_url);
        let response = self.http.put(&url).json(patch).send().await?;
        read_json(response).await
    }

    /// DELETE {base}/jobs/{id}. Upstream answers with an empty body, which
    /// decodes to `Value::Null`.
    pub async fn delete_job(&self, id: &str) -> Result<Value, BackendError> {
        let url = format!("{}/jobs/{id}", self.base_url);
        let response = self.http.delete(&url).send().await?;
        read_json(response).await
    }

    /// POST {base}/jobs/{id}/save with `{"user_id": ...}`.
    pub async fn save_job(&self, id: &str, user_id: &str) -> Result<Value, BackendError> {
        let url = format!("{}/jobs/{id}/save", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&json!({ "user_id": user_id }))
            .send()
            .await?;
        read_json(response).await
    }

    /// DELETE {base}/jobs/{id}/save?user_id={user_id}.
    pub async fn unsave_job(&self, id: &str, user_id: &str) -> Result<Value, BackendError> {
        let url = format!("{}/jobs/{id}/save", self.base_url);
        let response = self
            .http
            .delete(&url)
            .query(&[("user_id", user_id)])
            .send()
            .await?;
        read_json(response).await
    }
}
