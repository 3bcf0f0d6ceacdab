//! Domain entities representing core business objects.

pub mod admin_account;
pub mod reset_code;
pub mod session;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use admin_account::AdminAccount;
pub use reset_code::{
    is_well_formed_code, ResetCode, CODE_LENGTH, DEFAULT_CODE_TTL_MINUTES, MAX_ATTEMPTS,
};
pub use session::Session;
