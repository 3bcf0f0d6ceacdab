//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{AuthError, DispatchError, RepositoryError, ResetError};

pub type ResetResult<T> = Result<T, ResetError>;
