//! Admin session configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Session configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Session timeout in seconds
    pub timeout: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout: 3600, // 1 hour
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            timeout: env_or("SESSION_TIMEOUT_SECONDS", 3600),
        }
    }
}
