//! Unit tests for the session entity

use chrono::Duration;

use crate::domain::entities::session::Session;

#[test]
fn test_open_session() {
    let session = Session::open("authorized@example.com", Duration::hours(1));

    assert_eq!(session.email, "authorized@example.com");
    assert_eq!(session.token.len(), 32);
    assert!(!session.is_expired());
    assert_eq!(session.expires_at - session.created_at, Duration::hours(1));
}

#[test]
fn test_tokens_are_unique() {
    let a = Session::open("authorized@example.com", Duration::hours(1));
    let b = Session::open("authorized@example.com", Duration::hours(1));
    assert_ne!(a.token, b.token);
}

#[test]
fn test_zero_ttl_session_is_expired() {
    let session = Session::open("authorized@example.com", Duration::zero());
    assert!(session.is_expired());
}
