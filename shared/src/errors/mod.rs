//! Shared error types and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Common error codes used across the application
pub mod error_codes {
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const REQUEST_IN_PROGRESS: &str = "REQUEST_IN_PROGRESS";
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
    pub const SESSION_INVALID: &str = "SESSION_INVALID";
    pub const RESET_NOT_FOUND: &str = "RESET_NOT_FOUND";
    pub const TOO_MANY_RESETS: &str = "TOO_MANY_RESETS";
    pub const UNAUTHORIZED_EMAIL: &str = "UNAUTHORIZED_EMAIL";
    pub const DISPATCH_FAILED: &str = "DISPATCH_FAILED";
    pub const INVALID_CODE_FORMAT: &str = "INVALID_CODE_FORMAT";
    pub const CODE_INVALID_OR_EXPIRED: &str = "CODE_INVALID_OR_EXPIRED";
    pub const PASSWORD_MISMATCH: &str = "PASSWORD_MISMATCH";
    pub const PASSWORD_TOO_SHORT: &str = "PASSWORD_TOO_SHORT";
    pub const UPDATE_FAILED: &str = "UPDATE_FAILED";
    pub const RESEND_COOLDOWN: &str = "RESEND_COOLDOWN";
    pub const WRONG_STEP: &str = "WRONG_STEP";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
}
