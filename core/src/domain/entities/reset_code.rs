//! Reset code entity for the administrator password reset flow.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of a reset code
pub const CODE_LENGTH: usize = 6;

/// Default validity window for reset codes (15 minutes)
pub const DEFAULT_CODE_TTL_MINUTES: i64 = 15;

/// Wrong guesses a code absorbs before it is retired
pub const MAX_ATTEMPTS: i32 = 5;

/// One-time numeric code proving control of the authorized address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetCode {
    /// Unique identifier for the record
    pub id: Uuid,

    /// Address the code was issued for
    pub email: String,

    /// The 6-digit code
    pub code: String,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,

    /// Whether the code has been consumed, either by a successful
    /// verification or by running out of attempts
    pub used: bool,

    /// Wrong guesses counted against this code
    #[serde(default)]
    pub attempts: i32,
}

impl ResetCode {
    /// Creates a new unused code valid for `ttl_minutes` from now
    pub fn new(email: impl Into<String>, code: impl Into<String>, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            code: code.into(),
            created_at: now,
            expires_at: now + Duration::minutes(ttl_minutes),
            used: false,
            attempts: 0,
        }
    }

    /// Checks whether the code had expired at `now`
    ///
    /// A code is still valid while `expires_at` lies strictly in the future.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// A code is usable when it is unused and unexpired at `now`
    pub fn is_usable_at(&self, now: DateTime<Utc>) -> bool {
        !self.used && !self.is_expired_at(now)
    }

    /// Marks the code as used
    pub fn mark_used(&mut self) {
        self.used = true;
    }

    /// Count a wrong guess; the code is retired once `max_attempts` is reached
    ///
    /// Returns `true` when this guess retired the code.
    pub fn record_failed_attempt(&mut self, max_attempts: i32) -> bool {
        self.attempts += 1;
        if self.attempts >= max_attempts {
            self.used = true;
        }
        self.used
    }
}

/// Checks that `code` is exactly [`CODE_LENGTH`] ASCII digits
pub fn is_well_formed_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_digit())
}
