use actix_web::{post, web, HttpResponse, Responder};
use dbadvisor_agent::{analyze_project, validator, AdvisorGateway};
use shared_types::ErrorResponse;
use tracing::{debug, error};

/// Longest internal error message echoed back to the client
const MAX_INTERNAL_ERROR_CHARS: usize = 200;

#[post("/analyze-database")]
pub async fn analyze_database(
    gateway: web::Data<AdvisorGateway>,
    body: web::Bytes,
) -> impl Responder {
    if body.is_empty() {
        debug!("Rejected analysis request without a body");
        return HttpResponse::BadRequest().json(ErrorResponse::new("JSON data required"));
    }

    let payload: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            debug!(error = %e, "Rejected analysis request with invalid JSON");
            return HttpResponse::BadRequest().json(ErrorResponse::new("JSON data required"));
        }
    };

    let project = match validator::parse_project(payload) {
        Ok(project) => project,
        Err(e) => {
            debug!(error = %e, "Rejected invalid project data");
            return HttpResponse::BadRequest().json(ErrorResponse::new(e.to_string()));
        }
    };

    let response = analyze_project(&project, gateway.get_ref()).await;

    match serde_json::to_value(&response) {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(e) => {
            error!(project_name = %project.project_name, error = %e, "Failed to serialize analysis response");
            internal_error(&e.to_string())
        }
    }
}

fn internal_error(message: &str) -> HttpResponse {
    let message: String = message.chars().take(MAX_INTERNAL_ERROR_CHARS).collect();
    HttpResponse::InternalServerError().json(ErrorResponse::new(format!("Internal error: {}", message)))
}
