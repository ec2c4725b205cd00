use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use shared_types::{ApiResponse, Job};

pub const NOT_FOUND_MESSAGE: &str = "This job is no longer available";
pub const INTERNAL_FAILURE_MESSAGE: &str = "Something went wrong, please try again later";

/// Failures surfaced by job search and detail lookup.
///
/// `NotFound` covers both unknown ids and jobs that exist but are not open, so
/// callers cannot tell the two apart. `Internal` wraps whatever went wrong
/// underneath; only the generic message ever reaches the client.
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,
    #[error("{}", INTERNAL_FAILURE_MESSAGE)]
    Internal(#[from] anyhow::Error),
}

impl ResponseError for JobError {
    fn status_code(&self) -> StatusCode {
        match self {
            JobError::NotFound => StatusCode::NOT_FOUND,
            JobError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiResponse::<Job>::failure(self.to_string()))
    }
}
