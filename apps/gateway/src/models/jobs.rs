use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Summary job record as reported by the assistant backend. The gateway
/// relays these untouched; the struct exists for the documented contract,
/// for error-path placeholders, and for tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobBasic {
    pub title: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posting_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_women_friendly: Option<bool>,
    pub application_url: String,
}

/// One required skill on a job detail page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRequirement {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

/// Full job record: everything in `JobBasic` plus the long-form sections.
/// `additional_info` is an open map because upstream attaches free-form
/// extras the gateway must not interpret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDetail {
    #[serde(flatten)]
    pub basic: JobBasic,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub qualifications: Vec<String>,
    #[serde(default)]
    pub skills_required: Vec<SkillRequirement>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub why_women_friendly: Vec<String>,
    #[serde(default)]
    pub additional_info: Map<String, Value>,
}

impl JobDetail {
    /// Placeholder relayed when the job service cannot produce a detail
    /// page. Field values are part of the wire contract: the UI renders
    /// this card verbatim instead of special-casing the failure.
    pub fn unavailable() -> Self {
        Self {
            basic: JobBasic {
                title: "Job Details Unavailable".to_string(),
                company: "Unknown".to_string(),
                location: None,
                job_type: None,
                posting_date: None,
                salary_range: None,
                skills: Vec::new(),
                is_women_friendly: None,
                application_url: "#".to_string(),
            },
            description: None,
            qualifications: Vec::new(),
            skills_required: Vec::new(),
            benefits: Vec::new(),
            why_women_friendly: Vec::new(),
            additional_info: Map::new(),
        }
    }
}

/// Typed body for POST /api/jobs. The original platform forwarded untyped
/// payloads; required fields are now presence-checked before anything
/// leaves the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCreate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posting_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_women_friendly: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_url: Option<String>,
}

impl JobCreate {
    /// Presence checks only; the jobs backend owns everything else.
    pub fn validate(&self) -> Result<(), String> {
        for (value, name) in [
            (&self.title, "title"),
            (&self.company, "company"),
            (&self.application_url, "application_url"),
        ] {
            if value.as_deref().map(str::trim).filter(|v| !v.is_empty()).is_none() {
                return Err(format!("{name} is required"));
            }
        }
        Ok(())
    }
}

/// Typed body for PUT /api/jobs/:id. Every field optional; only supplied
/// fields are forwarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posting_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_women_friendly: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_url: Option<String>,
}
