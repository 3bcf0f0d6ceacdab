//! Email Module
//!
//! Delivery of password reset codes. Each dispatcher implements
//! [`NotificationDispatcher`] from `tr_core` and makes exactly one attempt
//! per code.
//!
//! - **EmailJS**: production delivery through the EmailJS REST API
//! - **Console**: writes the code to the log, for development

use std::sync::Arc;

use tr_core::services::{MessageTemplate, NotificationDispatcher};
use tr_shared::config::{EmailConfig, EmailProvider, ResetConfig};

pub mod console;
pub mod emailjs;

pub use console::ConsoleDispatcher;
pub use emailjs::EmailJsDispatcher;

#[cfg(test)]
mod tests;

/// Create the dispatcher selected by `config.provider`
///
/// An EmailJS configuration that cannot be used falls back to the console
/// dispatcher.
pub fn create_dispatcher(
    config: &EmailConfig,
    reset: &ResetConfig,
) -> Arc<dyn NotificationDispatcher> {
    let template = MessageTemplate::from_config(config, reset);
    match config.provider {
        EmailProvider::EmailJs => match EmailJsDispatcher::new(config.clone(), template.clone()) {
            Ok(dispatcher) => Arc::new(dispatcher),
            Err(e) => {
                tracing::error!("Failed to initialize EmailJS dispatcher: {}", e);
                tracing::warn!("Falling back to console email dispatcher");
                Arc::new(ConsoleDispatcher::new(template))
            }
        },
        EmailProvider::Console => Arc::new(ConsoleDispatcher::new(template)),
    }
}
