//! PostgreSQL repository implementations

mod account_repository_impl;
mod reset_code_repository_impl;

pub use account_repository_impl::PgAccountRepository;
pub use reset_code_repository_impl::PgResetCodeRepository;

use tr_core::errors::RepositoryError;

/// Classify a SQLx failure for the domain layer
pub(crate) fn map_sqlx_error(context: &str, e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepositoryError::Unavailable {
                message: format!("{}: {}", context, e),
            }
        }
        other => RepositoryError::query(format!("{}: {}", context, other)),
    }
}
