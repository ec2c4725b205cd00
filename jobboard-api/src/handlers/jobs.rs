use actix_web::{web, HttpResponse};
use shared_types::{ApiResponse, JobQuery};

use crate::search::{JobError, JobSearch};

/// Log the cause of a masked failure before it turns into a generic response
fn report(err: JobError, action: &str) -> JobError {
    if let JobError::Internal(cause) = &err {
        tracing::error!("Failed to {}: {:#}", action, cause);
    }
    err
}

pub async fn list_jobs(
    search: web::Data<JobSearch>,
    query: web::Query<JobQuery>,
) -> Result<HttpResponse, JobError> {
    let query = query.into_inner();

    let page = search
        .search(&query)
        .await
        .map_err(|e| report(e, "search jobs"))?;

    Ok(HttpResponse::Ok().json(page))
}

pub async fn get_job(
    search: web::Data<JobSearch>,
    path: web::Path<String>,
) -> Result<HttpResponse, JobError> {
    let job_id = path.into_inner();

    let job = search
        .get_by_id(&job_id)
        .await
        .map_err(|e| report(e, "load job"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(job)))
}
