//! Application factory
//!
//! Wires routes, middleware and extractor configuration onto an actix-web
//! `App`. State is built beforehand (see `bootstrap`) so tests can inject
//! in-memory collaborators.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use tr_shared::config::Environment;
use tr_shared::errors::{error_codes, ErrorResponse};

use crate::handlers::{json_error_handler, ApiError};
use crate::middleware::cors::create_cors;
use crate::routes::{auth, password_reset};
use crate::state::AppState;

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
    environment: Environment,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // A reset id that is not a UUID cannot name a live reset
        .app_data(web::PathConfig::default().error_handler(|_, _| ApiError::ResetNotFound.into()))
        .wrap(create_cors(environment))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/login", web::post().to(auth::login))
                        .route("/logout", web::post().to(auth::logout))
                        .route("/session", web::get().to(auth::current_session)),
                )
                .service(
                    web::scope("/password-reset")
                        .route("", web::post().to(password_reset::start))
                        .route("/{reset_id}", web::get().to(password_reset::status))
                        .route("/{reset_id}", web::delete().to(password_reset::cancel))
                        .route("/{reset_id}/email", web::post().to(password_reset::submit_email))
                        .route("/{reset_id}/code", web::post().to(password_reset::submit_code))
                        .route("/{reset_id}/resend", web::post().to(password_reset::resend_code))
                        .route(
                            "/{reset_id}/password",
                            web::post().to(password_reset::submit_password),
                        ),
                ),
        )
        .default_service(web::route().to(not_found))
}

async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let database = match &state.database {
        None => "in-memory",
        Some(pool) => match pool.health_check().await {
            Ok(true) => "up",
            _ => "down",
        },
    };
    let mut response = if database == "down" {
        HttpResponse::ServiceUnavailable()
    } else {
        HttpResponse::Ok()
    };

    response.json(serde_json::json!({
        "status": if database == "down" { "degraded" } else { "healthy" },
        "database": database,
        "service": "toolrent-api",
        "version": env!("CARGO_PKG_VERSION"),
        "active_resets": state.wizards.len().await,
        "active_sessions": state.sessions.active_sessions().await,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
