//! Outbound email configuration for reset code delivery

use serde::{Deserialize, Serialize};

use super::env_or;

/// Default EmailJS REST endpoint
pub const EMAILJS_DEFAULT_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Email delivery provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    /// EmailJS transactional email API
    EmailJs,
    /// Log messages instead of sending them
    Console,
}

impl std::str::FromStr for EmailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "emailjs" => Ok(EmailProvider::EmailJs),
            "console" | "mock" => Ok(EmailProvider::Console),
            _ => Err(format!("Invalid email provider: {}", s)),
        }
    }
}

/// Email delivery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    pub provider: EmailProvider,
    pub api_url: String,
    pub service_id: String,
    pub template_id: String,
    /// EmailJS public key, sent as `user_id`
    pub public_key: String,
    /// EmailJS private key, sent as `accessToken` when present
    #[serde(default)]
    pub private_key: Option<String>,
    /// Sender label shown in the message
    pub from_name: String,
    /// Recipient display name
    pub to_name: String,
    /// Subject line of the reset message
    pub subject: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: EmailProvider::Console,
            api_url: EMAILJS_DEFAULT_API_URL.to_string(),
            service_id: String::new(),
            template_id: String::from("template_password_reset"),
            public_key: String::new(),
            private_key: None,
            from_name: String::from("ToolRent Management System"),
            to_name: String::from("Administrator"),
            subject: String::from("Password Reset Code"),
            request_timeout_secs: 10,
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: env_or("EMAIL_PROVIDER", defaults.provider),
            api_url: std::env::var("EMAILJS_API_URL").unwrap_or(defaults.api_url),
            service_id: std::env::var("EMAILJS_SERVICE_ID").unwrap_or(defaults.service_id),
            template_id: std::env::var("EMAILJS_TEMPLATE_ID").unwrap_or(defaults.template_id),
            public_key: std::env::var("EMAILJS_PUBLIC_KEY").unwrap_or(defaults.public_key),
            private_key: std::env::var("EMAILJS_PRIVATE_KEY").ok(),
            from_name: std::env::var("EMAIL_FROM_NAME").unwrap_or(defaults.from_name),
            to_name: std::env::var("EMAIL_TO_NAME").unwrap_or(defaults.to_name),
            subject: std::env::var("EMAIL_SUBJECT").unwrap_or(defaults.subject),
            request_timeout_secs: env_or(
                "EMAIL_REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            ),
        }
    }

    /// Check whether the EmailJS credentials are filled in
    pub fn has_emailjs_credentials(&self) -> bool {
        !self.service_id.is_empty() && !self.template_id.is_empty() && !self.public_key.is_empty()
    }
}
