use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use tr_shared::types::ApiResponse;

use crate::dto::SubmitEmailRequest;
use crate::handlers::error::from_validation_errors;
use crate::handlers::ApiError;
use crate::state::AppState;

use super::{acquire, status_of};

/// Handler for POST /api/v1/password-reset/{reset_id}/email
///
/// # Request Body
///
/// ```json
/// { "email": "admin@example.com" }
/// ```
///
/// On success a 6-digit code has been emailed and the reset moves to the
/// Code step.
///
/// ## Errors
/// - 400 Bad Request: malformed email
/// - 403 Forbidden: email is not the authorized admin address
/// - 409 Conflict: reset is not at the Email step
/// - 502 Bad Gateway: the email could not be sent
pub async fn submit_email(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<SubmitEmailRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate().map_err(from_validation_errors)?;

    let reset_id = path.into_inner();
    let mut wizard = acquire(&state, reset_id).await?;

    let issued = wizard.submit_email(&request.email).await?;

    tracing::info!(
        %reset_id,
        provider = %issued.receipt.provider,
        event = "reset_code_sent",
        "Reset code sent"
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(status_of(
        reset_id,
        &wizard,
        Some(issued.expires_at),
    ))))
}
