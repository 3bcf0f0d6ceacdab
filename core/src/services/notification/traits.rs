use async_trait::async_trait;

use crate::errors::DispatchError;

use super::types::DispatchReceipt;

/// Delivers reset codes to the authorized recipient
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    /// Send `code` to `email`
    async fn send_reset_code(&self, email: &str, code: &str)
        -> Result<DispatchReceipt, DispatchError>;

    /// Name of the delivery channel (e.g. "emailjs", "console")
    fn provider_name(&self) -> &str;
}
