use actix_web::{web, HttpResponse};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use tr_core::domain::value_objects::ResetStep;
use tr_shared::types::ApiResponse;

use crate::handlers::ApiError;
use crate::state::AppState;

use super::acquire;

#[derive(Debug, Serialize)]
pub struct CancelResponse {
    pub reset_id: Uuid,
    /// Step the reset was at when it was closed
    pub closed_at_step: ResetStep,
}

/// Handler for DELETE /api/v1/password-reset/{reset_id}
///
/// Back to login: discards the reset and its resend timer. Allowed from any
/// step, including after success.
pub async fn cancel(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let reset_id = path.into_inner();

    // Holding the lock guarantees no request is mid-flight on this wizard.
    let guard = acquire(&state, reset_id).await?;
    let wizard = state
        .wizards
        .remove(reset_id)
        .await
        .ok_or(ApiError::ResetNotFound)?;
    let step = guard.step();
    drop(guard);

    let closed_at_step = match Arc::try_unwrap(wizard) {
        Ok(wizard) => wizard.into_inner().return_to_login(),
        // Another handler still holds a clone; it is unreachable once removed
        // and is dropped when that handler returns.
        Err(_) => step,
    };

    tracing::info!(%reset_id, step = %closed_at_step, event = "password_reset_closed", "Password reset closed");

    Ok(HttpResponse::Ok().json(ApiResponse::success(CancelResponse {
        reset_id,
        closed_at_step,
    })))
}
