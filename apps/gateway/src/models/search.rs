use serde::{Deserialize, Serialize};

use crate::models::jobs::JobBasic;

/// Hard cap on how many results one search may request from upstream.
pub const MAX_RESULTS: u32 = 50;

/// Inbound body of POST /api/search, forwarded to the assistant backend
/// after validation. Every field except `query` is an optional facet;
/// absent facets stay off the wire entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub women_friendly_only: Option<bool>,
}

impl SearchQuery {
    /// Trimmed query text, if one was actually supplied.
    pub fn query_text(&self) -> Option<&str> {
        self.query.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }

    /// Bounds `max_results` to 1..=MAX_RESULTS before the query leaves the
    /// gateway. A missing value is left missing; upstream applies its own
    /// default.
    pub fn clamp_max_results(&mut self) {
        if let Some(n) = self.max_results {
            self.max_results = Some(n.clamp(1, MAX_RESULTS));
        }
    }
}

/// Search result envelope owned by the assistant backend. Relayed
/// untouched on success; `Default` is the zeroed error payload, so a
/// failed search still renders as an ordinary empty result set.
/// `women_friendly_count <= total_results` is upstream's invariant, not
/// checked here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<JobBasic>,
    pub total_results: u64,
    pub query_time_ms: u64,
    pub women_friendly_count: u64,
}
