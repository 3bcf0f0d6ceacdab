//! CORS configuration for the admin dashboard.
//!
//! Development allows any origin. Production only allows the origins listed
//! in `ALLOWED_ORIGINS` (comma separated).

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

use tr_shared::config::Environment;

/// Creates a CORS middleware instance configured for `environment`.
///
/// `CORS_MAX_AGE` sets the preflight cache lifetime (default 3600 seconds).
pub fn create_cors(environment: Environment) -> Cors {
    let max_age = env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(3600);

    if environment.is_production() {
        create_production_cors(max_age)
    } else {
        create_development_cors(max_age)
    }
}

fn create_development_cors(max_age: usize) -> Cors {
    tracing::debug!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers(vec![header::RETRY_AFTER])
        .max_age(max_age)
}

fn create_production_cors(max_age: usize) -> Cors {
    tracing::info!("Configuring CORS for production environment");

    let origins = env::var("ALLOWED_ORIGINS").unwrap_or_default();
    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers(vec![header::RETRY_AFTER])
        .max_age(max_age);

    for origin in origins.split(',').map(str::trim).filter(|o| !o.is_empty()) {
        tracing::info!("Allowing CORS origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }
    cors
}
