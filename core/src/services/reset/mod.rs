//! Password reset wizard
//!
//! Drives one reset attempt through Email -> Code -> Password -> Success on
//! top of [`ResetCodeService`](crate::services::ResetCodeService).

mod cooldown;
mod state;
mod wizard;

#[cfg(test)]
mod tests;

pub use cooldown::{ResendCooldown, DEFAULT_RESEND_COOLDOWN_SECONDS};
pub use state::WizardState;
pub use wizard::PasswordResetWizard;
