use anyhow::{bail, Context, Result};

/// Development fallbacks for the two upstream base URLs. Production
/// refuses to boot without explicit values.
const DEV_BACKEND_API_URL: &str = "http://localhost:8000";
const DEV_JOBS_API_URL: &str = "http://localhost:5000/api";

/// Deployment environment, selected by APP_ENV. Anything other than
/// `production`/`prod` counts as development.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    /// Assistant backend (search, job detail, chat, health probe).
    pub backend_api_url: String,
    /// Jobs backend (listing CRUD, saved jobs).
    pub jobs_api_url: String,
    pub stripe_secret_key: Option<String>,
    pub stripe_publishable_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let environment = Environment::from_env();

        Ok(Config {
            environment,
            backend_api_url: resolve_base_url(
                env_var("BACKEND_API_URL"),
                "BACKEND_API_URL",
                DEV_BACKEND_API_URL,
                environment,
            )?,
            jobs_api_url: resolve_base_url(
                env_var("JOBS_API_URL"),
                "JOBS_API_URL",
                DEV_JOBS_API_URL,
                environment,
            )?,
            // Optional in every environment: without a secret key the
            // payment route answers with a configuration error instead of
            // blocking startup.
            stripe_secret_key: env_var("STRIPE_SECRET_KEY"),
            stripe_publishable_key: env_var("STRIPE_PUBLISHABLE_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Non-blank environment variable, if set.
fn env_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Resolves one upstream base URL. Development falls back to the local
/// literal; production treats an unset or blank URL as a startup failure.
/// Trailing slashes are stripped here so path joins stay single-slashed.
fn resolve_base_url(
    value: Option<String>,
    key: &str,
    dev_fallback: &str,
    environment: Environment,
) -> Result<String> {
    match value {
        Some(url) => Ok(url.trim_end_matches('/').to_string()),
        None if environment.is_production() => bail!("{key} must be set in production"),
        None => Ok(dev_fallback.to_string()),
    }
}
