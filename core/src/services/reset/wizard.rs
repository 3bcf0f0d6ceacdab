//! Step-by-step password reset driver

use std::sync::Arc;
use tokio::sync::watch;

use crate::domain::entities::reset_code::is_well_formed_code;
use crate::domain::value_objects::ResetStep;
use crate::errors::{ResetError, ResetResult};
use crate::repositories::{AccountRepository, ResetCodeRepository};
use crate::services::notification::NotificationDispatcher;
use crate::services::verification::{IssuedCode, ResetCodeService};

use super::cooldown::{ResendCooldown, DEFAULT_RESEND_COOLDOWN_SECONDS};
use super::state::WizardState;

/// One password reset attempt
///
/// Every action takes `&mut self`, so a wizard handles one action at a time.
/// A failed action leaves the wizard on its current step.
pub struct PasswordResetWizard<R: ?Sized, A: ?Sized, D: ?Sized> {
    service: Arc<ResetCodeService<R, A, D>>,
    state: WizardState,
    resend_cooldown_seconds: u32,
}

impl<R, A, D> PasswordResetWizard<R, A, D>
where
    R: ResetCodeRepository + ?Sized,
    A: AccountRepository + ?Sized,
    D: NotificationDispatcher + ?Sized,
{
    /// Start at the Email step, pre-filled with the authorized address
    pub fn new(service: Arc<ResetCodeService<R, A, D>>) -> Self {
        let email = service.authorized_email().to_string();
        Self {
            service,
            state: WizardState::Email { email },
            resend_cooldown_seconds: DEFAULT_RESEND_COOLDOWN_SECONDS,
        }
    }

    pub fn with_resend_cooldown(mut self, seconds: u32) -> Self {
        self.resend_cooldown_seconds = seconds;
        self
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> ResetStep {
        self.state.step()
    }

    /// Seconds before a resend is allowed, while at the Code step
    pub fn resend_remaining(&self) -> Option<u32> {
        match &self.state {
            WizardState::Code { cooldown, .. } => Some(cooldown.remaining()),
            _ => None,
        }
    }

    /// Countdown updates for the current Code step
    ///
    /// The channel closes once the wizard leaves the step.
    pub fn cooldown_updates(&self) -> Option<watch::Receiver<u32>> {
        match &self.state {
            WizardState::Code { cooldown, .. } => Some(cooldown.subscribe()),
            _ => None,
        }
    }

    /// Request a code for `email`
    pub async fn submit_email(&mut self, email: &str) -> ResetResult<IssuedCode> {
        match &mut self.state {
            WizardState::Email { email: draft } => *draft = email.to_string(),
            other => return Err(wrong_step(ResetStep::Email, other)),
        }

        let issued = self.service.issue(email).await?;
        self.state = WizardState::Code {
            email: issued.email.clone(),
            cooldown: ResendCooldown::start(self.resend_cooldown_seconds),
        };
        Ok(issued)
    }

    /// Check the code the user typed
    ///
    /// Anything other than exactly six digits is rejected without touching
    /// the store.
    pub async fn submit_code(&mut self, code: &str) -> ResetResult<()> {
        let email = match &self.state {
            WizardState::Code { email, .. } => email.clone(),
            other => return Err(wrong_step(ResetStep::Code, other)),
        };
        if !is_well_formed_code(code) {
            return Err(ResetError::InvalidCodeFormat);
        }

        let proof = self.service.verify(&email, code).await?;
        self.state = WizardState::Password { proof };
        Ok(())
    }

    /// Send a fresh code once the cooldown has run out
    pub async fn resend_code(&mut self) -> ResetResult<IssuedCode> {
        let email = match &self.state {
            WizardState::Code { email, cooldown } => {
                let remaining_seconds = cooldown.remaining();
                if remaining_seconds > 0 {
                    return Err(ResetError::ResendCooldownActive { remaining_seconds });
                }
                email.clone()
            }
            other => return Err(wrong_step(ResetStep::Code, other)),
        };

        let issued = self.service.issue(&email).await?;
        if let WizardState::Code { cooldown, .. } = &mut self.state {
            *cooldown = ResendCooldown::start(self.resend_cooldown_seconds);
        }
        tracing::debug!(code_id = %issued.code_id, "Reset code resent");
        Ok(issued)
    }

    /// Set the new password; `confirmation` must repeat it
    pub async fn submit_password(&mut self, password: &str, confirmation: &str) -> ResetResult<()> {
        let proof = match &self.state {
            WizardState::Password { proof } => proof,
            other => return Err(wrong_step(ResetStep::Password, other)),
        };
        if password != confirmation {
            return Err(ResetError::PasswordMismatch);
        }
        let min_length = self.service.config().min_password_length;
        if password.chars().count() < min_length {
            return Err(ResetError::PasswordTooShort { min_length });
        }

        self.service.update_password(proof, password).await?;
        self.state = WizardState::Success;
        Ok(())
    }

    /// Leave the reset flow
    ///
    /// Available from every step; the wizard and anything it still holds are
    /// discarded.
    pub fn return_to_login(self) -> ResetStep {
        let step = self.step();
        tracing::debug!(step = %step, "Leaving password reset");
        step
    }
}

fn wrong_step(expected: ResetStep, state: &WizardState) -> ResetError {
    ResetError::WrongStep {
        expected,
        actual: state.step(),
    }
}
