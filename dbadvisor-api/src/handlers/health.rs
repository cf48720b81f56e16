use actix_web::{get, HttpResponse, Responder};
use shared_types::HealthResponse;

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::healthy())
}
