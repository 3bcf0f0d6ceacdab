//! Database module - PostgreSQL implementations using SQLx
//!
//! This module provides:
//! - Connection pool management and schema migrations
//! - Repository implementations for reset codes and admin accounts

pub mod connection;
pub mod postgres;


// Re-export commonly used types
pub use connection::DatabasePool;
pub use postgres::{PgAccountRepository, PgResetCodeRepository};
