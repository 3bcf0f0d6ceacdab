//! # ToolRent Core
//!
//! Core business logic and domain layer for the ToolRent backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types for the administrator password reset flow and admin sessions.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{AdminAccount, ResetCode, Session};
pub use domain::value_objects::ResetStep;
pub use errors::*;
pub use repositories::{
    AccountRepository, InMemoryAccountRepository, InMemoryResetCodeRepository,
    ResetCodeRepository,
};
pub use services::*;
