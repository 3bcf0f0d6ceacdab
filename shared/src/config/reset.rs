//! Password reset flow configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Rules for the administrator password reset flow
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResetConfig {
    /// The only address allowed to request a reset code
    pub authorized_email: String,

    /// Minutes a reset code stays valid
    pub code_ttl_minutes: i64,

    /// Seconds before another code may be requested
    pub resend_cooldown_seconds: u32,

    /// Minimum accepted password length
    pub min_password_length: usize,

    /// Wrong guesses a code absorbs before it is retired
    pub max_code_attempts: i32,

    /// Resets that may be in progress at once
    pub max_active_resets: usize,
}

impl Default for ResetConfig {
    fn default() -> Self {
        Self {
            authorized_email: String::from("admin@toolrent.local"),
            code_ttl_minutes: 15,
            resend_cooldown_seconds: 60,
            min_password_length: 4,
            max_code_attempts: 5,
            max_active_resets: 64,
        }
    }
}

impl ResetConfig {
    /// Create a configuration for the given authorized address
    pub fn new(authorized_email: impl Into<String>) -> Self {
        Self {
            authorized_email: authorized_email.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            authorized_email: std::env::var("RESET_AUTHORIZED_EMAIL")
                .unwrap_or(defaults.authorized_email),
            code_ttl_minutes: env_or("RESET_CODE_TTL_MINUTES", defaults.code_ttl_minutes),
            resend_cooldown_seconds: env_or(
                "RESET_RESEND_COOLDOWN_SECONDS",
                defaults.resend_cooldown_seconds,
            ),
            min_password_length: env_or(
                "RESET_MIN_PASSWORD_LENGTH",
                defaults.min_password_length,
            ),
            max_code_attempts: env_or("RESET_MAX_CODE_ATTEMPTS", defaults.max_code_attempts),
            max_active_resets: env_or("RESET_MAX_ACTIVE_RESETS", defaults.max_active_resets),
        }
    }

    /// Human readable validity window embedded in outgoing messages
    pub fn expiry_description(&self) -> String {
        if self.code_ttl_minutes == 1 {
            "1 minute".to_string()
        } else {
            format!("{} minutes", self.code_ttl_minutes)
        }
    }
}
