//! Notification dispatcher contract for delivering reset codes
//!
//! Implementations live in the infrastructure layer. A dispatcher makes a
//! single delivery attempt and reports the outcome; it never retries.

mod traits;
mod types;

pub use traits::NotificationDispatcher;
pub use types::{DispatchReceipt, MessageTemplate, ResetCodeMessage};
