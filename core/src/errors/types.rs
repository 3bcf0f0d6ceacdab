//! Error types for the password reset flow, admin sessions and their collaborators
//!
//! `Display` of [`ResetError`] and [`AuthError`] is the user-visible message;
//! `code()` is the stable identifier the presentation layer keys on.

use thiserror::Error;
use tr_shared::errors::error_codes;

use crate::domain::value_objects::ResetStep;

/// Persistence failures reported by repository implementations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Storage unavailable: {message}")]
    Unavailable { message: String },

    #[error("Query failed: {message}")]
    Query { message: String },
}

impl RepositoryError {
    pub fn query(message: impl Into<String>) -> Self {
        RepositoryError::Query {
            message: message.into(),
        }
    }
}

/// Notification channel failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Email channel not configured: {message}")]
    NotConfigured { message: String },

    #[error("Email transport failed: {message}")]
    Transport { message: String },

    #[error("Email provider rejected the message (status {status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Errors surfaced by the password reset flow
///
/// None of these is fatal: the wizard stays on its current step so the user
/// can retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResetError {
    #[error("This email address is not authorized to reset the password")]
    UnauthorizedEmail,

    #[error("The code could not be delivered by email. Please try again")]
    DispatchFailed,

    #[error("The code must have exactly 6 digits")]
    InvalidCodeFormat,

    #[error("Invalid or expired code. Request a new code if needed")]
    CodeInvalidOrExpired,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {min_length} characters long")]
    PasswordTooShort { min_length: usize },

    #[error("The password could not be updated. Please try again")]
    UpdateFailed,

    #[error("Please wait {remaining_seconds} seconds before requesting a new code")]
    ResendCooldownActive { remaining_seconds: u32 },

    #[error("This action belongs to the {expected} step but the reset is at the {actual} step")]
    WrongStep { expected: ResetStep, actual: ResetStep },

    #[error("Internal server error")]
    Storage { message: String },
}

impl ResetError {
    /// Stable error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            ResetError::UnauthorizedEmail => error_codes::UNAUTHORIZED_EMAIL,
            ResetError::DispatchFailed => error_codes::DISPATCH_FAILED,
            ResetError::InvalidCodeFormat => error_codes::INVALID_CODE_FORMAT,
            ResetError::CodeInvalidOrExpired => error_codes::CODE_INVALID_OR_EXPIRED,
            ResetError::PasswordMismatch => error_codes::PASSWORD_MISMATCH,
            ResetError::PasswordTooShort { .. } => error_codes::PASSWORD_TOO_SHORT,
            ResetError::UpdateFailed => error_codes::UPDATE_FAILED,
            ResetError::ResendCooldownActive { .. } => error_codes::RESEND_COOLDOWN,
            ResetError::WrongStep { .. } => error_codes::WRONG_STEP,
            ResetError::Storage { .. } => error_codes::STORAGE_ERROR,
        }
    }
}

impl From<RepositoryError> for ResetError {
    fn from(err: RepositoryError) -> Self {
        ResetError::Storage {
            message: err.to_string(),
        }
    }
}

/// Admin login/session errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Session expired or invalid. Please log in again")]
    InvalidSession,

    #[error("Internal server error")]
    Storage { message: String },
}

impl AuthError {
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => error_codes::INVALID_CREDENTIALS,
            AuthError::InvalidSession => error_codes::SESSION_INVALID,
            AuthError::Storage { .. } => error_codes::STORAGE_ERROR,
        }
    }
}

impl From<RepositoryError> for AuthError {
    fn from(err: RepositoryError) -> Self {
        AuthError::Storage {
            message: err.to_string(),
        }
    }
}
