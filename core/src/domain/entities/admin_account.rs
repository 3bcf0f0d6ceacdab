//! Administrator account (credential record) entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dashboard administrator credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminAccount {
    /// Login address, unique per account
    pub email: String,

    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Last time the credential changed
    pub updated_at: DateTime<Utc>,
}

impl AdminAccount {
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
            updated_at: Utc::now(),
        }
    }
}
