use actix_web::{web, HttpResponse};
use uuid::Uuid;

use tr_core::domain::value_objects::ResetStep;
use tr_shared::types::ApiResponse;

use crate::handlers::ApiError;
use crate::state::AppState;

use super::{acquire, status_of};

/// Handler for GET /api/v1/password-reset/{reset_id}
///
/// While waiting for a code, also reports when the pending code expires and
/// how long until a resend is allowed.
pub async fn status(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let reset_id = path.into_inner();
    let wizard = acquire(&state, reset_id).await?;

    let code_expires_at = match (wizard.step(), wizard.state().email()) {
        (ResetStep::Code, Some(email)) => state.reset_service.pending_code_expiry(email).await?,
        _ => None,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(status_of(
        reset_id,
        &wizard,
        code_expires_at,
    ))))
}
