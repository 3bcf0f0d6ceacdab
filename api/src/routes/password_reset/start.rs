use actix_web::{web, HttpResponse};

use tr_shared::types::ApiResponse;

use crate::handlers::ApiError;
use crate::state::AppState;

use super::status_of;

/// Handler for POST /api/v1/password-reset
///
/// Opens a reset at the Email step, pre-filled with the authorized address.
///
/// # Response
///
/// 201 with `{ "reset_id": "...", "step": "email", "email": "a***@example.com" }`
///
/// ## Errors
/// - 503 Service Unavailable: too many resets already in progress
pub async fn start(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let wizard = state.new_wizard();
    let pending = status_of(uuid::Uuid::nil(), &wizard, None);
    let reset_id = state.wizards.insert(wizard).await?;

    tracing::info!(%reset_id, event = "password_reset_started", "Password reset started");

    Ok(HttpResponse::Created().json(ApiResponse::success(crate::dto::ResetStatusResponse {
        reset_id,
        ..pending
    })))
}
