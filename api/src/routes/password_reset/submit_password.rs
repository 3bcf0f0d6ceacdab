use actix_web::{web, HttpResponse};
use uuid::Uuid;

use tr_shared::types::ApiResponse;

use crate::dto::SubmitPasswordRequest;
use crate::handlers::ApiError;
use crate::state::AppState;

use super::{acquire, status_of};

/// Handler for POST /api/v1/password-reset/{reset_id}/password
///
/// # Request Body
///
/// ```json
/// { "password": "new-secret", "confirm_password": "new-secret" }
/// ```
///
/// Sessions opened with the old password are ended on success.
///
/// ## Errors
/// - 400 Bad Request: passwords differ or are too short
/// - 409 Conflict: reset is not at the Password step
/// - 500 Internal Server Error: the password could not be stored
pub async fn submit_password(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<SubmitPasswordRequest>,
) -> Result<HttpResponse, ApiError> {
    let reset_id = path.into_inner();
    let mut wizard = acquire(&state, reset_id).await?;

    wizard
        .submit_password(&request.password, &request.confirm_password)
        .await?;

    let revoked = state
        .sessions
        .revoke_all_for(state.reset_service.authorized_email())
        .await;

    tracing::info!(
        %reset_id,
        revoked_sessions = revoked,
        event = "password_reset_completed",
        "Admin password reset"
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(status_of(reset_id, &wizard, None))))
}
