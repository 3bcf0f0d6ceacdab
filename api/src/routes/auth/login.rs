use actix_web::{web, HttpResponse};
use validator::Validate;

use tr_shared::types::ApiResponse;

use crate::dto::{LoginRequest, LoginResponse};
use crate::handlers::error::from_validation_errors;
use crate::handlers::ApiError;
use crate::state::AppState;

/// Handler for POST /api/v1/auth/login
///
/// # Request Body
///
/// ```json
/// { "email": "admin@example.com", "password": "secret" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: malformed email or empty password
/// - 401 Unauthorized: wrong email or password
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate().map_err(from_validation_errors)?;

    let session = state
        .sessions
        .login(&request.email, &request.password)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(LoginResponse {
        token: session.token,
        email: session.email,
        expires_at: session.expires_at,
    })))
}
