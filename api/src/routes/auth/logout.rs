use actix_web::{web, HttpResponse};

use tr_shared::types::ApiResponse;

use crate::dto::LogoutResponse;
use crate::middleware::auth::AdminSession;
use crate::state::AppState;

/// Handler for POST /api/v1/auth/logout
///
/// Requires `Authorization: Bearer {token}`; the token stops working
/// immediately.
pub async fn logout(state: web::Data<AppState>, session: AdminSession) -> HttpResponse {
    state.sessions.logout(session.token()).await;
    HttpResponse::Ok().json(ApiResponse::success(LogoutResponse {
        message: "Logged out successfully".to_string(),
    }))
}
