//! Configuration for the reset code service

use tr_shared::config::ResetConfig;

use crate::domain::entities::reset_code::{DEFAULT_CODE_TTL_MINUTES, MAX_ATTEMPTS};

/// Configuration for the reset code service
#[derive(Debug, Clone)]
pub struct ResetCodeServiceConfig {
    /// The only address allowed to receive codes and change the password
    pub authorized_email: String,
    /// Minutes before an issued code expires
    pub code_ttl_minutes: i64,
    /// Wrong guesses before every pending code for the address is retired
    pub max_attempts: i32,
    /// Minimum accepted password length, in characters
    pub min_password_length: usize,
    /// bcrypt work factor used for the new password hash
    pub password_hash_cost: u32,
}

impl ResetCodeServiceConfig {
    pub fn new(authorized_email: impl Into<String>) -> Self {
        Self {
            authorized_email: authorized_email.into(),
            ..Default::default()
        }
    }

    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.password_hash_cost = cost;
        self
    }
}

impl Default for ResetCodeServiceConfig {
    fn default() -> Self {
        Self {
            authorized_email: ResetConfig::default().authorized_email,
            code_ttl_minutes: DEFAULT_CODE_TTL_MINUTES,
            max_attempts: MAX_ATTEMPTS,
            min_password_length: 4,
            password_hash_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl From<&ResetConfig> for ResetCodeServiceConfig {
    fn from(config: &ResetConfig) -> Self {
        Self {
            authorized_email: config.authorized_email.clone(),
            code_ttl_minutes: config.code_ttl_minutes,
            max_attempts: config.max_code_attempts,
            min_password_length: config.min_password_length,
            password_hash_cost: bcrypt::DEFAULT_COST,
        }
    }
}
