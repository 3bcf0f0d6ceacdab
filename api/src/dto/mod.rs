pub mod auth_dto;
pub mod reset_dto;

pub use auth_dto::*;
pub use reset_dto::*;

use validator::ValidationError;

use tr_shared::utils::email::is_valid_email;

/// Email field check that tolerates surrounding whitespace
///
/// Addresses are trimmed and lowercased before use, so `" Admin@x.com "`
/// is as acceptable as `"admin@x.com"`.
pub fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::new("email"))
    }
}
