pub mod config;
pub mod handlers;
pub mod helpers;

use actix_web::web;

/// Register every route of the advisor API
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::health::health)
        .service(handlers::analysis::analyze_database);
}
