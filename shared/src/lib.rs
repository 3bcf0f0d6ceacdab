//! Shared utilities and common types for the ToolRent server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error types and response structures
//! - Utility functions (email validation, masking)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, DatabaseConfig, EmailConfig, EmailProvider, Environment, LoggingConfig,
    ResetConfig, ServerConfig, SessionConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::ApiResponse;
pub use utils::email;
