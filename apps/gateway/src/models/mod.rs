pub mod health;
pub mod jobs;
pub mod payment;
pub mod search;

pub use health::{BackendHealth, HealthReport, HealthStatus};
pub use jobs::{JobBasic, JobCreate, JobDetail, JobUpdate, SkillRequirement};
pub use payment::{CheckoutOrder, CheckoutSessionRequest};
pub use search::{SearchQuery, SearchResponse, MAX_RESULTS};
