use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reported health state. `Error` belongs to the catch-all failure shape
/// of the health route and never describes a merely-unreachable backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Degraded,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendHealth {
    pub reachable: bool,
}

/// Snapshot answered by GET /api/health. Recomputed per request, never
/// cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub backend: BackendHealth,
}

impl HealthReport {
    pub fn current(backend_reachable: bool) -> Self {
        let status = if backend_reachable {
            HealthStatus::Ok
        } else {
            HealthStatus::Degraded
        };
        Self {
            status,
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            backend: BackendHealth {
                reachable: backend_reachable,
            },
        }
    }
}
