//! Console dispatcher for development
//!
//! Writes the reset code to the log instead of sending it. Never enable in
//! production: the code appears in plain text.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, warn};
use uuid::Uuid;

use tr_core::errors::DispatchError;
use tr_core::services::{DispatchReceipt, MessageTemplate, NotificationDispatcher};
use tr_shared::utils::email::mask_email;

pub struct ConsoleDispatcher {
    template: MessageTemplate,
    /// Report every delivery as failed, for exercising error paths
    fail_deliveries: AtomicBool,
}

impl ConsoleDispatcher {
    pub fn new(template: MessageTemplate) -> Self {
        Self {
            template,
            fail_deliveries: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail_deliveries.store(failing, Ordering::SeqCst);
    }
}

impl Default for ConsoleDispatcher {
    fn default() -> Self {
        Self::new(MessageTemplate::default())
    }
}

#[async_trait]
impl NotificationDispatcher for ConsoleDispatcher {
    async fn send_reset_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<DispatchReceipt, DispatchError> {
        if self.fail_deliveries.load(Ordering::SeqCst) {
            warn!(email = %mask_email(email), "Console dispatcher simulating a delivery failure");
            return Err(DispatchError::Transport {
                message: "simulated delivery failure".to_string(),
            });
        }

        let message = self.template.compose(email, code);
        let message_id = format!("console-{}", Uuid::new_v4());
        info!(
            to = %mask_email(&message.to_email),
            subject = %message.subject,
            code = %message.reset_code,
            expires_in = %message.expiry_time,
            message_id = %message_id,
            "[DEV] Password reset code"
        );

        Ok(DispatchReceipt {
            provider: self.provider_name().to_string(),
            message_id: Some(message_id),
        })
    }

    fn provider_name(&self) -> &str {
        "console"
    }
}
