//! HTTP routes exposed by the relay.

use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;
use actix_web::web;

pub mod submit;

/// Verbs accepted by the relay endpoint.
pub const ALLOWED_METHODS: &str = "POST, OPTIONS";

/// Permissive cross-origin headers attached to every response.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
}

/// Mounts the relay endpoint on `submit_path`.
pub fn configure(cfg: &mut web::ServiceConfig, submit_path: &str) {
    cfg.service(
        web::resource(submit_path)
            .route(web::post().to(submit::submit_lead))
            .route(web::method(actix_web::http::Method::OPTIONS).to(submit::preflight))
            .default_service(web::to(submit::method_not_allowed)),
    );
}
