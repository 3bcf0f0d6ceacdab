//! Reset code repository trait defining the persistence contract for
//! password reset codes.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::reset_code::ResetCode;
use crate::errors::RepositoryError;

/// Repository trait for [`ResetCode`] persistence
///
/// Filters are exact-match equality on the named fields.
#[async_trait]
pub trait ResetCodeRepository: Send + Sync {
    /// Delete every code stored for `code.email` and insert `code`
    ///
    /// Both halves happen in one atomic operation: no observer sees the
    /// email without a code while the replacement is in progress, and a
    /// failure leaves the previous codes in place.
    async fn replace_for_email(&self, code: &ResetCode) -> Result<(), RepositoryError>;

    /// Find all codes matching `(email, code)` exactly, oldest first
    async fn find_matching(&self, email: &str, code: &str)
        -> Result<Vec<ResetCode>, RepositoryError>;

    /// Find all codes stored for `email`, oldest first
    async fn find_by_email(&self, email: &str) -> Result<Vec<ResetCode>, RepositoryError>;

    /// Mark the code with `id` as used
    ///
    /// # Returns
    /// * `Ok(true)` - the code was unused and is now used
    /// * `Ok(false)` - no such code, or it was already used
    async fn mark_used(&self, id: Uuid) -> Result<bool, RepositoryError>;

    /// Count a wrong guess against every pending code for `email`
    ///
    /// Pending means unused and unexpired. A code whose attempt count reaches
    /// `max_attempts` is marked used in the same update.
    ///
    /// # Returns
    /// * `Ok(true)` - at least one code was retired by this guess
    /// * `Ok(false)` - no code was retired
    async fn record_failed_attempt(
        &self,
        email: &str,
        max_attempts: i32,
    ) -> Result<bool, RepositoryError>;
}
