//! Main reset code service implementation

use chrono::{DateTime, Utc};
use rand::{rngs::OsRng, Rng};
use std::sync::Arc;
use tr_shared::utils::email::{mask_email, normalize_email};

use crate::domain::entities::reset_code::{is_well_formed_code, ResetCode};
use crate::errors::{ResetError, ResetResult};
use crate::repositories::{AccountRepository, ResetCodeRepository};
use crate::services::notification::NotificationDispatcher;
use crate::services::password::hash_password;

use super::config::ResetCodeServiceConfig;
use super::types::{IssuedCode, VerifiedCode};

/// Service issuing and redeeming password reset codes
pub struct ResetCodeService<R: ?Sized, A: ?Sized, D: ?Sized> {
    /// Reset code storage
    codes: Arc<R>,
    /// Administrator credentials
    accounts: Arc<A>,
    /// Delivery channel for codes
    dispatcher: Arc<D>,
    /// Service configuration
    config: ResetCodeServiceConfig,
}

impl<R, A, D> ResetCodeService<R, A, D>
where
    R: ResetCodeRepository + ?Sized,
    A: AccountRepository + ?Sized,
    D: NotificationDispatcher + ?Sized,
{
    /// Create a new reset code service
    ///
    /// # Arguments
    ///
    /// * `codes` - Reset code repository
    /// * `accounts` - Admin account repository
    /// * `dispatcher` - Channel delivering the codes
    /// * `config` - Service configuration
    pub fn new(
        codes: Arc<R>,
        accounts: Arc<A>,
        dispatcher: Arc<D>,
        mut config: ResetCodeServiceConfig,
    ) -> Self {
        config.authorized_email = normalize_email(&config.authorized_email);
        Self {
            codes,
            accounts,
            dispatcher,
            config,
        }
    }

    pub fn config(&self) -> &ResetCodeServiceConfig {
        &self.config
    }

    /// The single address allowed to reset the password (normalized)
    pub fn authorized_email(&self) -> &str {
        &self.config.authorized_email
    }

    /// Whether `email` matches the authorized address after normalization
    pub fn is_authorized(&self, email: &str) -> bool {
        normalize_email(email) == self.config.authorized_email
    }

    /// Issue a fresh code for `email` and send it
    ///
    /// This method:
    /// 1. Rejects any address other than the authorized one
    /// 2. Generates a new 6-digit code
    /// 3. Replaces every stored code for the address with the new one
    /// 4. Hands the code to the dispatcher
    ///
    /// When delivery fails the new code stays stored, so it can still be
    /// looked up out of band, and `DispatchFailed` is returned.
    pub async fn issue(&self, email: &str) -> ResetResult<IssuedCode> {
        let email = normalize_email(email);
        if email != self.config.authorized_email {
            tracing::warn!(
                email = %mask_email(&email),
                event = "reset_code_rejected",
                "Reset code requested for an unauthorized address"
            );
            return Err(ResetError::UnauthorizedEmail);
        }

        let code = ResetCode::new(
            email.clone(),
            Self::generate_secure_code(),
            self.config.code_ttl_minutes,
        );

        self.codes.replace_for_email(&code).await.map_err(|e| {
            tracing::error!(
                error = %e,
                event = "reset_code_store_failed",
                "Failed to store reset code"
            );
            ResetError::from(e)
        })?;

        tracing::info!(
            email = %mask_email(&email),
            code_id = %code.id,
            expires_at = %code.expires_at,
            event = "reset_code_generated",
            "Generated new reset code"
        );

        match self.dispatcher.send_reset_code(&email, &code.code).await {
            Ok(receipt) => {
                tracing::info!(
                    email = %mask_email(&email),
                    provider = %receipt.provider,
                    message_id = ?receipt.message_id,
                    event = "reset_code_sent",
                    "Reset code delivered"
                );
                Ok(IssuedCode {
                    code_id: code.id,
                    email,
                    expires_at: code.expires_at,
                    receipt,
                })
            }
            Err(e) => {
                tracing::warn!(
                    email = %mask_email(&email),
                    code_id = %code.id,
                    provider = self.dispatcher.provider_name(),
                    error = %e,
                    event = "reset_code_dispatch_failed",
                    "Reset code stored but delivery failed"
                );
                Err(ResetError::DispatchFailed)
            }
        }
    }

    /// Verify `code` for `email` and consume it
    ///
    /// A code is accepted when a stored record matches the address and code
    /// exactly, is unused and has not expired. The matching record is marked
    /// used before the proof is returned; losing that race to a concurrent
    /// verification counts as an invalid code.
    ///
    /// Every miss counts against the pending code; after `max_attempts`
    /// misses it is retired and even the right code is refused. The caller
    /// sees the same `CodeInvalidOrExpired` either way.
    pub async fn verify(&self, email: &str, code: &str) -> ResetResult<VerifiedCode> {
        let email = normalize_email(email);
        if !is_well_formed_code(code) {
            return Err(ResetError::CodeInvalidOrExpired);
        }

        let now = Utc::now();
        let candidates = self.codes.find_matching(&email, code).await?;
        let Some(record) = candidates.into_iter().find(|c| c.is_usable_at(now)) else {
            let retired = self
                .codes
                .record_failed_attempt(&email, self.config.max_attempts)
                .await?;
            if retired {
                tracing::warn!(
                    email = %mask_email(&email),
                    max_attempts = self.config.max_attempts,
                    event = "reset_code_attempts_exhausted",
                    "Reset code retired after too many wrong guesses"
                );
            } else {
                tracing::warn!(
                    email = %mask_email(&email),
                    event = "reset_code_invalid",
                    "Reset code verification failed"
                );
            }
            return Err(ResetError::CodeInvalidOrExpired);
        };

        if !self.codes.mark_used(record.id).await? {
            tracing::warn!(
                code_id = %record.id,
                event = "reset_code_already_used",
                "Reset code was consumed concurrently"
            );
            return Err(ResetError::CodeInvalidOrExpired);
        }

        tracing::info!(
            email = %mask_email(&email),
            code_id = %record.id,
            event = "reset_code_verified",
            "Reset code verified"
        );

        Ok(VerifiedCode::new(email, record.id))
    }

    /// Set a new password for the account named by `proof`
    ///
    /// Fails with `UpdateFailed` when hashing or storage fails, or when no
    /// account matches the verified address.
    pub async fn update_password(&self, proof: &VerifiedCode, new_password: &str) -> ResetResult<()> {
        let min_length = self.config.min_password_length;
        if new_password.chars().count() < min_length {
            return Err(ResetError::PasswordTooShort { min_length });
        }

        let hash = hash_password(new_password, self.config.password_hash_cost)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to hash new password");
                ResetError::UpdateFailed
            })?;

        let updated = self
            .accounts
            .update_password(proof.email(), &hash)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    event = "password_update_failed",
                    "Failed to store new password"
                );
                ResetError::UpdateFailed
            })?;

        if updated == 0 {
            tracing::warn!(
                email = %mask_email(proof.email()),
                event = "password_update_failed",
                "No admin account matches the verified address"
            );
            return Err(ResetError::UpdateFailed);
        }

        tracing::info!(
            email = %mask_email(proof.email()),
            code_id = %proof.code_id(),
            verified_at = %proof.verified_at(),
            event = "password_updated",
            "Administrator password updated"
        );
        Ok(())
    }

    /// Expiry of the newest usable code for `email`, if any
    pub async fn pending_code_expiry(&self, email: &str) -> ResetResult<Option<DateTime<Utc>>> {
        let email = normalize_email(email);
        let now = Utc::now();
        let codes = self.codes.find_by_email(&email).await?;
        Ok(codes
            .iter()
            .filter(|c| c.is_usable_at(now))
            .map(|c| c.expires_at)
            .max())
    }

    /// Generate a uniformly distributed 6-digit code with the OS CSPRNG
    ///
    /// Leading zeros are kept, so every value from `000000` to `999999` is
    /// possible.
    pub fn generate_secure_code() -> String {
        let code: u32 = OsRng.gen_range(0..1_000_000);
        format!("{:06}", code)
    }
}
