//! Unit tests for the password reset wizard

use std::time::Duration;

use crate::domain::value_objects::ResetStep;
use crate::errors::ResetError;
use crate::repositories::{
    AccountRepository, InMemoryAccountRepository, InMemoryResetCodeRepository, ResetCodeRepository,
};
use crate::services::password::verify_password;
use crate::services::reset::{PasswordResetWizard, WizardState};
use crate::services::verification::tests::mocks::{
    fixture, Fixture, MockDispatcher, AUTHORIZED_EMAIL, OLD_PASSWORD,
};

type TestWizard =
    PasswordResetWizard<InMemoryResetCodeRepository, InMemoryAccountRepository, MockDispatcher>;

fn wizard(f: &Fixture) -> TestWizard {
    PasswordResetWizard::new(f.service.clone())
}

async fn wizard_at_code(f: &Fixture) -> (TestWizard, String) {
    let mut w = wizard(f);
    w.submit_email(AUTHORIZED_EMAIL).await.unwrap();
    let code = f.dispatcher.last_code_for(AUTHORIZED_EMAIL).unwrap();
    (w, code)
}

fn other_code(code: &str) -> &'static str {
    if code == "000000" {
        "000001"
    } else {
        "000000"
    }
}

#[tokio::test]
async fn test_starts_at_email_with_authorized_address() {
    let f = fixture();
    let w = wizard(&f);

    assert_eq!(w.step(), ResetStep::Email);
    assert_eq!(w.state().email(), Some(AUTHORIZED_EMAIL));
    assert!(w.resend_remaining().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_submit_email_moves_to_code_and_starts_cooldown() {
    let f = fixture();
    let mut w = wizard(&f);

    let issued = w.submit_email(AUTHORIZED_EMAIL).await.unwrap();

    assert_eq!(w.step(), ResetStep::Code);
    assert_eq!(issued.email, AUTHORIZED_EMAIL);
    assert_eq!(w.resend_remaining(), Some(60));
}

#[tokio::test]
async fn test_submit_email_unauthorized_stays_on_email() {
    let f = fixture();
    let mut w = wizard(&f);

    let result = w.submit_email("intruder@example.com").await;

    assert_eq!(result.unwrap_err(), ResetError::UnauthorizedEmail);
    assert_eq!(w.step(), ResetStep::Email);
    assert_eq!(w.state().email(), Some("intruder@example.com"));
}

#[tokio::test]
async fn test_submit_email_dispatch_failure_stays_on_email() {
    let f = fixture();
    f.dispatcher.set_failing(true);
    let mut w = wizard(&f);

    let result = w.submit_email(AUTHORIZED_EMAIL).await;

    assert_eq!(result.unwrap_err(), ResetError::DispatchFailed);
    assert_eq!(w.step(), ResetStep::Email);

    // Retry once the channel is back
    f.dispatcher.set_failing(false);
    assert!(w.submit_email(AUTHORIZED_EMAIL).await.is_ok());
    assert_eq!(w.step(), ResetStep::Code);
}

#[tokio::test(start_paused = true)]
async fn test_malformed_code_rejected_without_lookup() {
    let f = fixture();
    let (mut w, _) = wizard_at_code(&f).await;
    let before = f.codes.find_by_email(AUTHORIZED_EMAIL).await.unwrap();

    for bad in ["12", "1234567", "12a456", ""] {
        let result = w.submit_code(bad).await;
        assert_eq!(result.unwrap_err(), ResetError::InvalidCodeFormat);
    }

    assert_eq!(w.step(), ResetStep::Code);
    assert_eq!(f.codes.find_by_email(AUTHORIZED_EMAIL).await.unwrap(), before);
    assert_eq!(f.dispatcher.sent_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_wrong_code_stays_on_code_and_keeps_cooldown() {
    let f = fixture();
    let (mut w, code) = wizard_at_code(&f).await;
    tokio::time::sleep(Duration::from_millis(5_500)).await;

    let result = w.submit_code(other_code(&code)).await;

    assert_eq!(result.unwrap_err(), ResetError::CodeInvalidOrExpired);
    assert_eq!(w.step(), ResetStep::Code);
    assert_eq!(w.resend_remaining(), Some(55));
}

#[tokio::test(start_paused = true)]
async fn test_correct_code_moves_to_password() {
    let f = fixture();
    let (mut w, code) = wizard_at_code(&f).await;

    w.submit_code(&code).await.unwrap();

    assert_eq!(w.step(), ResetStep::Password);
    match w.state() {
        WizardState::Password { proof } => assert_eq!(proof.email(), AUTHORIZED_EMAIL),
        other => panic!("Expected password step, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn test_leaving_code_step_cancels_cooldown() {
    let f = fixture();
    let (mut w, code) = wizard_at_code(&f).await;
    let mut updates = w.cooldown_updates().unwrap();

    w.submit_code(&code).await.unwrap();
    tokio::time::sleep(Duration::from_secs(3)).await;

    assert!(updates.changed().await.is_err());
    assert!(w.resend_remaining().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_resend_rejected_during_cooldown() {
    let f = fixture();
    let (mut w, _) = wizard_at_code(&f).await;
    tokio::time::sleep(Duration::from_millis(20_500)).await;

    let result = w.resend_code().await;

    assert_eq!(
        result.unwrap_err(),
        ResetError::ResendCooldownActive {
            remaining_seconds: 40
        }
    );
    assert_eq!(f.dispatcher.sent_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_resend_after_cooldown_issues_new_code() {
    let f = fixture();
    let (mut w, first) = wizard_at_code(&f).await;
    tokio::time::sleep(Duration::from_secs(61)).await;
    assert_eq!(w.resend_remaining(), Some(0));

    w.resend_code().await.unwrap();

    assert_eq!(f.dispatcher.sent_count(), 2);
    assert_eq!(w.resend_remaining(), Some(60));
    let stored = f.codes.find_by_email(AUTHORIZED_EMAIL).await.unwrap();
    assert_eq!(stored.len(), 1);
    let second = f.dispatcher.last_code_for(AUTHORIZED_EMAIL).unwrap();
    assert_eq!(stored[0].code, second);

    if first != second {
        assert_eq!(
            w.submit_code(&first).await.unwrap_err(),
            ResetError::CodeInvalidOrExpired
        );
    }
    w.submit_code(&second).await.unwrap();
    assert_eq!(w.step(), ResetStep::Password);
}

#[tokio::test(start_paused = true)]
async fn test_custom_cooldown_length() {
    let f = fixture();
    let mut w = wizard(&f).with_resend_cooldown(5);
    w.submit_email(AUTHORIZED_EMAIL).await.unwrap();

    tokio::time::sleep(Duration::from_millis(5_500)).await;

    assert!(w.resend_code().await.is_ok());
}

#[tokio::test]
async fn test_password_mismatch_and_too_short() {
    let f = fixture();
    let (mut w, code) = wizard_at_code(&f).await;
    w.submit_code(&code).await.unwrap();

    assert_eq!(
        w.submit_password("newpass1", "newpass2").await.unwrap_err(),
        ResetError::PasswordMismatch
    );
    assert_eq!(
        w.submit_password("abc", "abc").await.unwrap_err(),
        ResetError::PasswordTooShort { min_length: 4 }
    );
    assert_eq!(w.step(), ResetStep::Password);

    let account = f.accounts.find_by_email(AUTHORIZED_EMAIL).await.unwrap().unwrap();
    assert!(verify_password(OLD_PASSWORD, &account.password_hash).await);
}

#[tokio::test]
async fn test_full_flow_reaches_success() {
    let f = fixture();
    let (mut w, code) = wizard_at_code(&f).await;

    w.submit_code(&code).await.unwrap();
    w.submit_password("newpass1", "newpass1").await.unwrap();

    assert_eq!(w.step(), ResetStep::Success);
    assert!(w.state().email().is_none());
    let account = f.accounts.find_by_email(AUTHORIZED_EMAIL).await.unwrap().unwrap();
    assert!(verify_password("newpass1", &account.password_hash).await);
    assert_eq!(w.return_to_login(), ResetStep::Success);
}

#[tokio::test]
async fn test_actions_in_wrong_step_leave_state_unchanged() {
    let f = fixture();
    let mut w = wizard(&f);

    assert_eq!(
        w.submit_code("123456").await.unwrap_err(),
        ResetError::WrongStep {
            expected: ResetStep::Code,
            actual: ResetStep::Email
        }
    );
    assert_eq!(
        w.resend_code().await.unwrap_err(),
        ResetError::WrongStep {
            expected: ResetStep::Code,
            actual: ResetStep::Email
        }
    );
    assert_eq!(
        w.submit_password("newpass1", "newpass1").await.unwrap_err(),
        ResetError::WrongStep {
            expected: ResetStep::Password,
            actual: ResetStep::Email
        }
    );
    assert_eq!(w.step(), ResetStep::Email);
    assert_eq!(f.dispatcher.sent_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_submit_email_twice_is_wrong_step() {
    let f = fixture();
    let (mut w, _) = wizard_at_code(&f).await;

    let result = w.submit_email(AUTHORIZED_EMAIL).await;

    assert_eq!(
        result.unwrap_err(),
        ResetError::WrongStep {
            expected: ResetStep::Email,
            actual: ResetStep::Code
        }
    );
    assert_eq!(f.dispatcher.sent_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_return_to_login_from_code_step_drops_cooldown() {
    let f = fixture();
    let (w, _) = wizard_at_code(&f).await;
    let mut updates = w.cooldown_updates().unwrap();

    assert_eq!(w.return_to_login(), ResetStep::Code);

    assert!(updates.changed().await.is_err());
}
