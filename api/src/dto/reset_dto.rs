use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use tr_core::domain::value_objects::ResetStep;

use super::validate_email_address;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitEmailRequest {
    #[validate(custom = "validate_email_address")]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitCodeRequest {
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitPasswordRequest {
    pub password: String,
    pub confirm_password: String,
}

/// Where a reset stands after a request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetStatusResponse {
    pub reset_id: Uuid,
    pub step: ResetStep,
    /// Masked address the reset is about
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Seconds before another code can be requested (Code step only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resend_after: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_resend: Option<bool>,
    /// Expiry of the code just sent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_expires_at: Option<DateTime<Utc>>,
}
