use crate::domain::value_objects::ResetStep;
use crate::services::verification::VerifiedCode;

use super::cooldown::ResendCooldown;

/// Where a reset attempt stands, with the data that step owns
///
/// Moving to another variant drops the previous one, so the resend cooldown
/// only lives while the wizard is waiting for a code.
#[derive(Debug)]
pub enum WizardState {
    /// Waiting for the address to send a code to
    Email { email: String },
    /// Code sent to `email`, waiting for the user to type it
    Code {
        email: String,
        cooldown: ResendCooldown,
    },
    /// Code verified, waiting for the new password
    Password { proof: VerifiedCode },
    /// Password changed
    Success,
}

impl WizardState {
    pub fn step(&self) -> ResetStep {
        match self {
            WizardState::Email { .. } => ResetStep::Email,
            WizardState::Code { .. } => ResetStep::Code,
            WizardState::Password { .. } => ResetStep::Password,
            WizardState::Success => ResetStep::Success,
        }
    }

    /// Address the attempt is about, if the step still carries one
    pub fn email(&self) -> Option<&str> {
        match self {
            WizardState::Email { email } | WizardState::Code { email, .. } => Some(email),
            WizardState::Password { proof } => Some(proof.email()),
            WizardState::Success => None,
        }
    }
}
