//! Bearer session authentication for admin-only endpoints.
//!
//! Handlers take an [`AdminSession`] argument; the extractor reads the
//! `Authorization: Bearer <token>` header and checks the token against the
//! session registry.

use actix_web::{http::header::AUTHORIZATION, web, Error, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;

use tr_core::domain::entities::Session;
use tr_core::errors::AuthError;

use crate::handlers::ApiError;
use crate::state::AppState;

/// An authenticated administrator session
#[derive(Debug, Clone)]
pub struct AdminSession(pub Session);

impl AdminSession {
    pub fn token(&self) -> &str {
        &self.0.token
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }
}

/// Token from an `Authorization: Bearer ...` header
pub fn extract_bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

impl FromRequest for AdminSession {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let token = extract_bearer_token(req);
        let state = req.app_data::<web::Data<AppState>>().cloned();

        Box::pin(async move {
            let token = token.ok_or(ApiError::Auth(AuthError::InvalidSession))?;
            let state = state.ok_or_else(|| {
                tracing::error!("Application state missing from request");
                ApiError::Auth(AuthError::Storage {
                    message: "application state not configured".to_string(),
                })
            })?;
            let session = state.sessions.validate(&token).await.map_err(ApiError::from)?;
            Ok(AdminSession(session))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_extract_bearer_token() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_http_request();
        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_no_bearer = TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_http_request();
        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_empty = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer "))
            .to_http_request();
        assert_eq!(extract_bearer_token(&req_empty), None);

        let req_no_header = TestRequest::default().to_http_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }
}
