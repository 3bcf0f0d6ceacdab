use actix_web::{web, HttpResponse};
use uuid::Uuid;

use tr_shared::types::ApiResponse;

use crate::handlers::ApiError;
use crate::state::AppState;

use super::{acquire, status_of};

/// Handler for POST /api/v1/password-reset/{reset_id}/resend
///
/// Replaces the pending code with a new one and restarts the resend cooldown.
///
/// ## Errors
/// - 409 Conflict: reset is not at the Code step
/// - 429 Too Many Requests: cooldown still running (see `Retry-After`)
/// - 502 Bad Gateway: the email could not be sent
pub async fn resend_code(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let reset_id = path.into_inner();
    let mut wizard = acquire(&state, reset_id).await?;

    let issued = wizard.resend_code().await?;

    tracing::info!(%reset_id, event = "reset_code_resent", "Reset code resent");

    Ok(HttpResponse::Ok().json(ApiResponse::success(status_of(
        reset_id,
        &wizard,
        Some(issued.expires_at),
    ))))
}
