//! Route handlers
//!
//! - `auth` - admin login, logout and session lookup
//! - `password_reset` - the step-by-step password reset flow

pub mod auth;
pub mod password_reset;
