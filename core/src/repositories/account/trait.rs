//! Admin account repository trait.

use async_trait::async_trait;

use crate::domain::entities::admin_account::AdminAccount;
use crate::errors::RepositoryError;

/// Repository trait for administrator credentials
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find the account registered under `email`
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminAccount>, RepositoryError>;

    /// Overwrite the stored password hash of the account matching `email`
    ///
    /// # Returns
    /// * `Ok(n)` - number of accounts updated (0 when no account matches)
    async fn update_password(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<u64, RepositoryError>;
}
