use serde::{Deserialize, Serialize};
use tr_shared::config::{EmailConfig, ResetConfig};

/// Outcome of a successful delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReceipt {
    pub provider: String,
    /// Provider-side message reference, when the channel returns one
    pub message_id: Option<String>,
}

/// Fixed parts of the reset message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    pub to_name: String,
    pub from_name: String,
    pub subject: String,
    /// Validity window as shown to the recipient, e.g. "15 minutes"
    pub expiry_description: String,
}

impl MessageTemplate {
    pub fn from_config(email: &EmailConfig, reset: &ResetConfig) -> Self {
        Self {
            to_name: email.to_name.clone(),
            from_name: email.from_name.clone(),
            subject: email.subject.clone(),
            expiry_description: reset.expiry_description(),
        }
    }

    /// Fill in the template for one recipient and code
    pub fn compose(&self, email: &str, code: &str) -> ResetCodeMessage {
        ResetCodeMessage {
            to_email: email.to_string(),
            to_name: self.to_name.clone(),
            from_name: self.from_name.clone(),
            subject: self.subject.clone(),
            reset_code: code.to_string(),
            message: format!(
                "You requested a password reset for the {}.\n\nYour verification code is: {}",
                self.from_name, code
            ),
            expiry_time: self.expiry_description.clone(),
        }
    }
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self::from_config(&EmailConfig::default(), &ResetConfig::default())
    }
}

/// Template parameters of a reset code message
///
/// Field names are the template variables understood by the email template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetCodeMessage {
    pub to_email: String,
    pub to_name: String,
    pub from_name: String,
    pub subject: String,
    pub reset_code: String,
    pub message: String,
    pub expiry_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_embeds_code_and_expiry() {
        let template = MessageTemplate::default();
        let message = template.compose("authorized@example.com", "004211");

        assert_eq!(message.to_email, "authorized@example.com");
        assert_eq!(message.reset_code, "004211");
        assert!(message.message.contains("004211"));
        assert_eq!(message.expiry_time, "15 minutes");
        assert_eq!(message.to_name, "Administrator");
    }

    #[test]
    fn test_message_serializes_template_variables() {
        let message = MessageTemplate::default().compose("authorized@example.com", "123456");
        let json = serde_json::to_value(&message).unwrap();

        for key in [
            "to_email",
            "to_name",
            "from_name",
            "subject",
            "reset_code",
            "message",
            "expiry_time",
        ] {
            assert!(json.get(key).is_some(), "missing template variable {}", key);
        }
    }
}
