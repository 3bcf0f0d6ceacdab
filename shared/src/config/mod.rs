//! Configuration module with business-specific sub-modules
//!
//! - `auth` - Admin session configuration
//! - `database` - Database connection and pool configuration
//! - `email` - Outbound email (reset code delivery) configuration
//! - `environment` - Environment detection and logging configuration
//! - `reset` - Password reset flow rules
//! - `server` - HTTP server configuration

pub mod auth;
pub mod database;
pub mod email;
pub mod environment;
pub mod reset;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::SessionConfig;
pub use database::DatabaseConfig;
pub use email::{EmailConfig, EmailProvider};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use reset::ResetConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    /// `None` runs the service on in-memory repositories
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    pub reset: ResetConfig,
    pub email: EmailConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: None,
            reset: ResetConfig::default(),
            email: EmailConfig::default(),
            session: SessionConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            reset: ResetConfig::from_env(),
            email: EmailConfig::from_env(),
            session: SessionConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }
}

/// Read and parse an environment variable, falling back to `default` when it
/// is missing or malformed.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
