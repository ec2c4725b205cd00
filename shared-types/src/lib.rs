pub mod health;
pub mod job;

pub use health::HealthResponse;
pub use job::{ApiResponse, Job, JobQuery, JobStatus, JobsPage, PageMeta, ParseJobStatusError};
