use actix_web::{web, HttpResponse};
use uuid::Uuid;

use tr_shared::types::ApiResponse;

use crate::dto::SubmitCodeRequest;
use crate::handlers::ApiError;
use crate::state::AppState;

use super::{acquire, status_of};

/// Handler for POST /api/v1/password-reset/{reset_id}/code
///
/// # Request Body
///
/// ```json
/// { "code": "123456" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: code is not 6 digits, or is wrong, used or expired
/// - 409 Conflict: reset is not at the Code step
pub async fn submit_code(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<SubmitCodeRequest>,
) -> Result<HttpResponse, ApiError> {
    let reset_id = path.into_inner();
    let mut wizard = acquire(&state, reset_id).await?;

    wizard.submit_code(&request.code).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(status_of(reset_id, &wizard, None))))
}
