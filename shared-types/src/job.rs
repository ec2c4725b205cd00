use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// Visibility state of a posting. Only `Open` jobs are ever shown to candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum JobStatus {
    Open,
    Closed,
    Filled,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Open => "OPEN",
            JobStatus::Closed => "CLOSED",
            JobStatus::Filled => "FILLED",
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, JobStatus::Open)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown job status: {0}")]
pub struct ParseJobStatusError(pub String);

impl FromStr for JobStatus {
    type Err = ParseJobStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OPEN" => Ok(JobStatus::Open),
            "CLOSED" => Ok(JobStatus::Closed),
            "FILLED" => Ok(JobStatus::Filled),
            _ => Err(ParseJobStatusError(s.to_string())),
        }
    }
}

/// A single job posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub level: String,
    pub employment_type: String,

    // Display strings, e.g. "$1,500"
    pub salary_min: Option<String>,
    pub salary_max: Option<String>,

    // Numeric bounds used by the salary range filters
    pub salary_min_num: Option<i64>,
    pub salary_max_num: Option<i64>,

    pub status: JobStatus,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,

    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Query string accepted by the job listing endpoint.
///
/// Every field is kept as the raw string the client sent. Interpretation
/// (numeric coercion, defaults) happens in the search pipeline so that
/// malformed values degrade to defaults instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct JobQuery {
    pub q: Option<String>,
    pub location: Option<String>,
    pub level: Option<String>,
    pub employment_type: Option<String>,
    pub salary_min: Option<String>,
    pub salary_max: Option<String>,
    pub page: Option<String>,
    pub size: Option<String>,
}

/// Pagination metadata returned alongside a page of jobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u32,
    pub size: u32,
    pub total_items: u32,
    pub total_pages: u32,
}

/// Response for the job listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct JobsPage {
    pub items: Vec<Job>,
    pub meta: PageMeta,
}

/// Envelope used by the job detail endpoint and by every error response
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}
