//! Shared setup for API integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::web;
use tr_api::state::DEFAULT_MAX_ACTIVE_RESETS;
use tr_api::AppState;
use tr_core::domain::entities::AdminAccount;
use tr_core::errors::DispatchError;
use tr_core::repositories::{InMemoryAccountRepository, InMemoryResetCodeRepository};
use tr_core::services::{DispatchReceipt, NotificationDispatcher, ResetCodeServiceConfig};
use tr_shared::config::SessionConfig;

pub const ADMIN_EMAIL: &str = "authorized@example.com";
pub const MASKED_ADMIN_EMAIL: &str = "a***d@example.com";
pub const OLD_PASSWORD: &str = "oldpass";

/// Dispatcher that keeps every code it was asked to send
#[derive(Default)]
pub struct TestInbox {
    codes: Mutex<Vec<String>>,
    failing: AtomicBool,
}

impl TestInbox {
    pub fn latest(&self) -> String {
        self.codes.lock().unwrap().last().cloned().expect("no code sent")
    }

    pub fn count(&self) -> usize {
        self.codes.lock().unwrap().len()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl NotificationDispatcher for TestInbox {
    async fn send_reset_code(&self, _email: &str, code: &str) -> Result<DispatchReceipt, DispatchError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DispatchError::Transport {
                message: "mailbox offline".to_string(),
            });
        }
        self.codes.lock().unwrap().push(code.to_string());
        Ok(DispatchReceipt {
            provider: "test-inbox".to_string(),
            message_id: None,
        })
    }

    fn provider_name(&self) -> &str {
        "test-inbox"
    }
}

pub struct TestApp {
    pub state: web::Data<AppState>,
    pub inbox: Arc<TestInbox>,
    pub codes: Arc<InMemoryResetCodeRepository>,
}

/// State over in-memory stores with the admin seeded at [`OLD_PASSWORD`]
pub fn test_app(resend_cooldown_seconds: u32) -> TestApp {
    test_app_with_capacity(resend_cooldown_seconds, DEFAULT_MAX_ACTIVE_RESETS)
}

pub fn test_app_with_capacity(resend_cooldown_seconds: u32, max_active_resets: usize) -> TestApp {
    let codes = Arc::new(InMemoryResetCodeRepository::new());
    let accounts = Arc::new(InMemoryAccountRepository::with_accounts([AdminAccount::new(
        ADMIN_EMAIL,
        bcrypt::hash(OLD_PASSWORD, 4).unwrap(),
    )]));
    let inbox = Arc::new(TestInbox::default());

    let state = AppState::new(
        codes.clone(),
        accounts,
        inbox.clone(),
        ResetCodeServiceConfig::new(ADMIN_EMAIL).with_hash_cost(4),
        &SessionConfig::default(),
        resend_cooldown_seconds,
    )
    .with_max_active_resets(max_active_resets);

    TestApp {
        state: web::Data::new(state),
        inbox,
        codes,
    }
}

/// Send a request and return its status and JSON body
macro_rules! send {
    ($app:expr, $req:expr) => {{
        let resp = actix_web::test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let headers = resp.headers().clone();
        let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
        (status, body, headers)
    }};
}
