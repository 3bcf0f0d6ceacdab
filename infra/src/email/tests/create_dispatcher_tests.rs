//! Unit tests for dispatcher selection

use tr_shared::config::{EmailConfig, EmailProvider, ResetConfig};

use crate::email::create_dispatcher;

#[test]
fn test_create_console_dispatcher() {
    let config = EmailConfig::default();
    let dispatcher = create_dispatcher(&config, &ResetConfig::default());
    assert_eq!(dispatcher.provider_name(), "console");
}

#[test]
fn test_create_emailjs_dispatcher() {
    let config = EmailConfig {
        provider: EmailProvider::EmailJs,
        service_id: "service_test".to_string(),
        public_key: "public_test".to_string(),
        ..Default::default()
    };
    let dispatcher = create_dispatcher(&config, &ResetConfig::default());
    assert_eq!(dispatcher.provider_name(), "emailjs");
}

#[test]
fn test_emailjs_without_credentials_falls_back_to_console() {
    let config = EmailConfig {
        provider: EmailProvider::EmailJs,
        ..Default::default()
    };
    let dispatcher = create_dispatcher(&config, &ResetConfig::default());
    assert_eq!(dispatcher.provider_name(), "console");
}
