//! Business services containing domain logic and use cases.

pub mod notification;
pub mod password;
pub mod reset;
pub mod session;
pub mod verification;

// Re-export commonly used types
pub use notification::{DispatchReceipt, MessageTemplate, NotificationDispatcher, ResetCodeMessage};
pub use reset::{PasswordResetWizard, ResendCooldown, WizardState, DEFAULT_RESEND_COOLDOWN_SECONDS};
pub use session::SessionService;
pub use verification::{IssuedCode, ResetCodeService, ResetCodeServiceConfig, VerifiedCode};
