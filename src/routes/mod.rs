// Route exports
pub mod health;
pub mod matches;

use actix_cors::Cors;
use actix_web::web;

use crate::config::CorsSettings;
use crate::core::Matcher;
use crate::error::handle_json_payload_error;

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub service_name: String,
}

/// JSON extractor configuration: body size limit plus the JSON error handler
pub fn json_config(limit_bytes: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit_bytes)
        .error_handler(handle_json_payload_error)
}

/// Restrict cross-origin access to the configured backend origins
pub fn cors(settings: &CorsSettings) -> Cors {
    settings
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        .configure(health::configure)
        .service(
            web::scope("/api")
                .configure(health::configure_api)
                .configure(matches::configure),
        );
}
