//! Unit tests for the console dispatcher

use tr_core::errors::DispatchError;
use tr_core::services::NotificationDispatcher;

use crate::email::ConsoleDispatcher;

#[tokio::test]
async fn test_console_dispatch_succeeds() {
    let dispatcher = ConsoleDispatcher::default();

    let receipt = dispatcher
        .send_reset_code("authorized@example.com", "123456")
        .await
        .unwrap();

    assert_eq!(receipt.provider, "console");
    assert!(receipt.message_id.unwrap().starts_with("console-"));
}

#[tokio::test]
async fn test_console_dispatch_simulated_failure() {
    let dispatcher = ConsoleDispatcher::default();
    dispatcher.set_failing(true);

    let result = dispatcher
        .send_reset_code("authorized@example.com", "123456")
        .await;

    assert!(matches!(result, Err(DispatchError::Transport { .. })));
}
