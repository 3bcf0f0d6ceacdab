use actix_web::HttpResponse;

use tr_shared::types::ApiResponse;

use crate::dto::SessionResponse;
use crate::middleware::auth::AdminSession;

/// Handler for GET /api/v1/auth/session
pub async fn current_session(session: AdminSession) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(SessionResponse {
        email: session.email().to_string(),
        expires_at: session.0.expires_at,
    }))
}
