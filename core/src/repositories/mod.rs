//! Repository interfaces for the reset code and admin account collections,
//! with in-memory implementations used for development and tests.

pub mod account;
pub mod reset_code;

pub use account::{AccountRepository, InMemoryAccountRepository};
pub use reset_code::{InMemoryResetCodeRepository, ResetCodeRepository};
