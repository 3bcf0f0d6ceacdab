//! Types for reset code service results

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::services::notification::DispatchReceipt;

/// Result of issuing a reset code
#[derive(Debug, Clone)]
pub struct IssuedCode {
    /// Identifier of the persisted code record
    pub code_id: Uuid,
    /// Normalized address the code was sent to
    pub email: String,
    /// When the code stops being accepted
    pub expires_at: DateTime<Utc>,
    /// Delivery details from the dispatcher
    pub receipt: DispatchReceipt,
}

/// Proof that a reset code was verified and consumed
///
/// Only [`ResetCodeService::verify`](super::ResetCodeService::verify) creates
/// one, so holding a `VerifiedCode` is the precondition for changing the
/// password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedCode {
    email: String,
    code_id: Uuid,
    verified_at: DateTime<Utc>,
}

impl VerifiedCode {
    pub(crate) fn new(email: impl Into<String>, code_id: Uuid) -> Self {
        Self {
            email: email.into(),
            code_id,
            verified_at: Utc::now(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn code_id(&self) -> Uuid {
        self.code_id
    }

    pub fn verified_at(&self) -> DateTime<Utc> {
        self.verified_at
    }
}
