pub mod health;
pub mod jobs;

use actix_web::web;

/// Register every route served by the API
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health))
        .route("/api/jobs", web::get().to(jobs::list_jobs))
        .route("/api/jobs/{id}", web::get().to(jobs::get_job));
}
