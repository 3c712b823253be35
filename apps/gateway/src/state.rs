use crate::backend::{AssistantClient, JobsClient};
use crate::config::Config;
use crate::payments::StripeClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub assistant: AssistantClient,
    pub jobs: JobsClient,
    /// Absent when STRIPE_SECRET_KEY is not configured; the payment route
    /// reports that as a configuration error at request time.
    pub stripe: Option<StripeClient>,
    pub config: Config,
}

impl AppState {
    /// Wires the clients from configuration. The binary's only
    /// construction path; tests build the struct directly against stub
    /// servers.
    pub fn from_config(config: Config) -> Self {
        let assistant = AssistantClient::new(config.backend_api_url.clone());
        let jobs = JobsClient::new(config.jobs_api_url.clone());
        let stripe = config.stripe_secret_key.clone().map(StripeClient::new);

        Self {
            assistant,
            jobs,
            stripe,
            config,
        }
    }
}
