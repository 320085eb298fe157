use actix_web::{web, HttpResponse, Responder};

use crate::models::{HealthResponse, HelloResponse};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/hello", web::get().to(hello));
}

/// Health check endpoint
///
/// Always healthy while the process is serving; there are no downstream
/// dependencies to probe.
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: state.service_name.clone(),
        timestamp: chrono::Utc::now(),
    })
}

/// Connectivity test for the calling backend
async fn hello() -> impl Responder {
    HttpResponse::Ok().json(HelloResponse {
        message: "Hello from AI Service!".to_string(),
        description: "This is the Research Network AI Matching Engine".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
