//! EmailJS Dispatcher Implementation
//!
//! Sends reset codes through the EmailJS REST endpoint
//! (`POST /api/v1.0/email/send`). The recipient, code and expiry are passed
//! as template parameters; EmailJS renders the message.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, info};

use tr_core::errors::DispatchError;
use tr_core::services::{DispatchReceipt, MessageTemplate, NotificationDispatcher, ResetCodeMessage};
use tr_shared::config::EmailConfig;
use tr_shared::utils::email::mask_email;

use crate::InfrastructureError;

/// Request body of the EmailJS send endpoint
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: ResetCodeMessage,
}

/// EmailJS dispatcher
pub struct EmailJsDispatcher {
    client: reqwest::Client,
    config: EmailConfig,
    template: MessageTemplate,
}

impl EmailJsDispatcher {
    /// Create a new EmailJS dispatcher
    ///
    /// Fails when the service, template or public key is missing.
    pub fn new(config: EmailConfig, template: MessageTemplate) -> Result<Self, InfrastructureError> {
        if !config.has_emailjs_credentials() {
            return Err(InfrastructureError::Config(
                "EMAILJS_SERVICE_ID, EMAILJS_TEMPLATE_ID and EMAILJS_PUBLIC_KEY must be set"
                    .to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            service_id = %config.service_id,
            template_id = %config.template_id,
            "EmailJS dispatcher initialized"
        );

        Ok(Self {
            client,
            config,
            template,
        })
    }

    fn request<'a>(&'a self, email: &str, code: &str) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            access_token: self.config.private_key.as_deref(),
            template_params: self.template.compose(email, code),
        }
    }
}

#[async_trait]
impl NotificationDispatcher for EmailJsDispatcher {
    async fn send_reset_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<DispatchReceipt, DispatchError> {
        debug!(email = %mask_email(email), "Sending reset code via EmailJS");

        let response = self
            .client
            .post(&self.config.api_url)
            .json(&self.request(email, code))
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "EmailJS request failed");
                DispatchError::Transport {
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                status = status.as_u16(),
                body = %body,
                "EmailJS rejected the message"
            );
            return Err(DispatchError::Rejected {
                status: status.as_u16(),
                message: body,
            });
        }

        info!(email = %mask_email(email), "Reset code sent via EmailJS");
        Ok(DispatchReceipt {
            provider: self.provider_name().to_string(),
            message_id: None,
        })
    }

    fn provider_name(&self) -> &str {
        "emailjs"
    }
}
