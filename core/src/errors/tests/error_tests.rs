//! Unit tests for error types

use std::collections::HashSet;

use crate::domain::value_objects::ResetStep;
use crate::errors::{AuthError, RepositoryError, ResetError};

fn every_reset_error() -> Vec<ResetError> {
    vec![
        ResetError::UnauthorizedEmail,
        ResetError::DispatchFailed,
        ResetError::InvalidCodeFormat,
        ResetError::CodeInvalidOrExpired,
        ResetError::PasswordMismatch,
        ResetError::PasswordTooShort { min_length: 4 },
        ResetError::UpdateFailed,
        ResetError::ResendCooldownActive { remaining_seconds: 12 },
        ResetError::WrongStep {
            expected: ResetStep::Code,
            actual: ResetStep::Email,
        },
        ResetError::Storage {
            message: "boom".to_string(),
        },
    ]
}

#[test]
fn test_each_reset_error_has_distinct_code_and_message() {
    let errors = every_reset_error();
    let codes: HashSet<_> = errors.iter().map(|e| e.code()).collect();
    let messages: HashSet<_> = errors.iter().map(|e| e.to_string()).collect();

    assert_eq!(codes.len(), errors.len());
    assert_eq!(messages.len(), errors.len());
}

#[test]
fn test_messages_carry_parameters() {
    assert!(ResetError::PasswordTooShort { min_length: 4 }
        .to_string()
        .contains('4'));
    assert!(ResetError::ResendCooldownActive { remaining_seconds: 12 }
        .to_string()
        .contains("12"));
}

#[test]
fn test_storage_error_hides_internal_detail() {
    let err: ResetError = RepositoryError::query("relation does not exist").into();
    assert_eq!(err.code(), "STORAGE_ERROR");
    assert!(!err.to_string().contains("relation"));
    match err {
        ResetError::Storage { message } => assert!(message.contains("relation")),
        other => panic!("Expected storage error, got {:?}", other),
    }
}

#[test]
fn test_auth_error_codes() {
    assert_eq!(AuthError::InvalidCredentials.code(), "INVALID_CREDENTIALS");
    assert_eq!(AuthError::InvalidSession.code(), "SESSION_INVALID");
    let err: AuthError = RepositoryError::Unavailable {
        message: "pool closed".to_string(),
    }
    .into();
    assert_eq!(err.code(), "STORAGE_ERROR");
}
