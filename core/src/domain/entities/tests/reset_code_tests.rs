//! Unit tests for the reset code entity

use chrono::{Duration, Utc};

use crate::domain::entities::reset_code::{
    is_well_formed_code, ResetCode, CODE_LENGTH, DEFAULT_CODE_TTL_MINUTES, MAX_ATTEMPTS,
};

#[test]
fn test_new_reset_code() {
    let code = ResetCode::new("authorized@example.com", "042917", DEFAULT_CODE_TTL_MINUTES);

    assert_eq!(code.email, "authorized@example.com");
    assert_eq!(code.code.len(), CODE_LENGTH);
    assert!(!code.used);
    assert!(!code.is_expired_at(Utc::now()));
    assert!(code.is_usable_at(Utc::now()));
    assert_eq!(code.attempts, 0);
    assert_eq!(code.expires_at, code.created_at + Duration::minutes(15));
}

#[test]
fn test_used_code_is_not_usable() {
    let mut code = ResetCode::new("authorized@example.com", "123456", DEFAULT_CODE_TTL_MINUTES);
    code.mark_used();

    assert!(code.used);
    assert!(!code.is_expired_at(Utc::now()));
    assert!(!code.is_usable_at(Utc::now()));
}

#[test]
fn test_expiry_boundary() {
    let code = ResetCode::new("authorized@example.com", "123456", DEFAULT_CODE_TTL_MINUTES);

    assert!(code.is_usable_at(code.expires_at - Duration::seconds(1)));
    // Expiry is exclusive: at the exact instant the code is gone
    assert!(code.is_expired_at(code.expires_at));
    assert!(!code.is_usable_at(code.expires_at + Duration::seconds(1)));
}

#[test]
fn test_code_retires_after_max_attempts() {
    let mut code = ResetCode::new("authorized@example.com", "123456", DEFAULT_CODE_TTL_MINUTES);

    for _ in 1..MAX_ATTEMPTS {
        assert!(!code.record_failed_attempt(MAX_ATTEMPTS));
    }
    assert!(code.is_usable_at(Utc::now()));

    assert!(code.record_failed_attempt(MAX_ATTEMPTS));
    assert_eq!(code.attempts, MAX_ATTEMPTS);
    assert!(!code.is_usable_at(Utc::now()));
}

#[test]
fn test_code_format() {
    assert!(is_well_formed_code("000000"));
    assert!(is_well_formed_code("987654"));
    assert!(!is_well_formed_code("12"));
    assert!(!is_well_formed_code("1234567"));
    assert!(!is_well_formed_code("12345a"));
    assert!(!is_well_formed_code("１２３４５６"));
}
