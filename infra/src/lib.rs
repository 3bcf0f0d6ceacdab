//! # Infrastructure Layer
//!
//! Concrete implementations of the ports defined in `tr_core`:
//!
//! - **Database**: PostgreSQL repositories for reset codes and admin
//!   accounts, using SQLx
//! - **Email**: reset code delivery through the EmailJS REST API, plus a
//!   console dispatcher for development
//!
//! ## Features
//!
//! - `postgres`: Enable PostgreSQL database support (default)

// Re-export core types for convenience
pub use tr_core::errors::*;

/// Database module - PostgreSQL implementations using SQLx
#[cfg(feature = "postgres")]
pub mod database;

/// Email module - reset code delivery
pub mod email;

/// Load a `.env` file into the process environment, if present
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "Failed to read environment file"),
    }
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
