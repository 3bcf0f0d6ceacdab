//! Reset code service
//!
//! Issues, verifies and redeems the one-time codes that let the authorized
//! administrator set a new password:
//! - code generation with a CSPRNG and single-active-code persistence
//! - delivery through a [`NotificationDispatcher`](crate::services::NotificationDispatcher)
//! - verification that consumes the code and yields a [`VerifiedCode`] proof
//! - password update gated on that proof

mod config;
mod service;
mod types;


pub use config::ResetCodeServiceConfig;
pub use service::ResetCodeService;
pub use types::{IssuedCode, VerifiedCode};
