use actix_web::{web, HttpResponse, Responder};
use shared_types::HealthResponse;

use crate::search::JobSearch;

pub async fn health(search: web::Data<JobSearch>) -> impl Responder {
    let storage = search.backend_name().to_string();

    match search.ping().await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse {
            status: "healthy".to_string(),
            storage,
        }),
        Err(e) => {
            tracing::warn!("Health check failed: {:#}", e);
            HttpResponse::ServiceUnavailable().json(HealthResponse {
                status: "unhealthy".to_string(),
                storage,
            })
        }
    }
}
