//! Mapping of domain errors onto HTTP responses

use actix_web::{
    error::JsonPayloadError,
    http::{header, StatusCode},
    HttpRequest, HttpResponse, ResponseError,
};
use std::fmt;

use tr_core::errors::{AuthError, ResetError};
use tr_shared::errors::{error_codes, ErrorResponse};

/// Every way an API request can fail
#[derive(Debug)]
pub enum ApiError {
    Reset(ResetError),
    Auth(AuthError),
    /// Request body or parameters failed validation
    Validation {
        message: String,
        fields: Vec<String>,
    },
    /// No live wizard under the given reset id
    ResetNotFound,
    /// The wizard is busy with another request
    RequestInProgress,
    /// The limit of resets in progress is reached
    TooManyResets,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Stable error code for the response body
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Reset(e) => e.code(),
            ApiError::Auth(e) => e.code(),
            ApiError::Validation { .. } => error_codes::VALIDATION_ERROR,
            ApiError::ResetNotFound => error_codes::RESET_NOT_FOUND,
            ApiError::RequestInProgress => error_codes::REQUEST_IN_PROGRESS,
            ApiError::TooManyResets => error_codes::TOO_MANY_RESETS,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Reset(e) => write!(f, "{}", e),
            ApiError::Auth(e) => write!(f, "{}", e),
            ApiError::Validation { message, .. } => write!(f, "{}", message),
            ApiError::ResetNotFound => {
                write!(f, "Password reset not found or expired. Please start again")
            }
            ApiError::RequestInProgress => {
                write!(f, "Another request for this reset is still being processed")
            }
            ApiError::TooManyResets => {
                write!(f, "Too many password resets in progress. Please try again later")
            }
        }
    }
}

impl From<ResetError> for ApiError {
    fn from(e: ResetError) -> Self {
        ApiError::Reset(e)
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        ApiError::Auth(e)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Reset(e) => match e {
                ResetError::UnauthorizedEmail => StatusCode::FORBIDDEN,
                ResetError::DispatchFailed => StatusCode::BAD_GATEWAY,
                ResetError::InvalidCodeFormat
                | ResetError::CodeInvalidOrExpired
                | ResetError::PasswordMismatch
                | ResetError::PasswordTooShort { .. } => StatusCode::BAD_REQUEST,
                ResetError::ResendCooldownActive { .. } => StatusCode::TOO_MANY_REQUESTS,
                ResetError::WrongStep { .. } => StatusCode::CONFLICT,
                ResetError::UpdateFailed | ResetError::Storage { .. } => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            ApiError::Auth(e) => match e {
                AuthError::InvalidCredentials | AuthError::InvalidSession => {
                    StatusCode::UNAUTHORIZED
                }
                AuthError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResetNotFound => StatusCode::NOT_FOUND,
            ApiError::RequestInProgress => StatusCode::CONFLICT,
            ApiError::TooManyResets => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        } else {
            tracing::debug!(code = self.code(), "Request rejected");
        }

        let mut body = ErrorResponse::new(self.code(), self.to_string());
        let mut response = HttpResponse::build(status);
        match self {
            ApiError::Reset(ResetError::ResendCooldownActive { remaining_seconds }) => {
                body = body.add_detail("remaining_seconds", remaining_seconds);
                response.insert_header((header::RETRY_AFTER, remaining_seconds.to_string()));
            }
            ApiError::Reset(ResetError::PasswordTooShort { min_length }) => {
                body = body.add_detail("min_length", min_length);
            }
            ApiError::Reset(ResetError::WrongStep { expected, actual }) => {
                body = body
                    .add_detail("expected_step", expected)
                    .add_detail("current_step", actual);
            }
            ApiError::Validation { fields, .. } if !fields.is_empty() => {
                body = body.add_detail("fields", fields);
            }
            _ => {}
        }
        response.json(body)
    }
}

/// Turn malformed JSON bodies into the standard error shape
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected request body");
    ApiError::validation(format!("Invalid request body: {}", err)).into()
}

/// Convert `validator` failures, listing the offending fields
pub fn from_validation_errors(errors: validator::ValidationErrors) -> ApiError {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();
    ApiError::Validation {
        message: "Request validation failed".to_string(),
        fields,
    }
}
