//! End-to-end tests of the password reset flow and admin login

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use tr_core::domain::entities::AdminAccount;
    use tr_core::domain::value_objects::ResetStep;
    use tr_core::errors::{DispatchError, ResetError};
    use tr_core::repositories::{
        InMemoryAccountRepository, InMemoryResetCodeRepository, ResetCodeRepository,
    };
    use tr_core::services::{
        DispatchReceipt, NotificationDispatcher, PasswordResetWizard, ResetCodeService,
        ResetCodeServiceConfig, SessionService,
    };
    use tr_shared::config::SessionConfig;

    const EMAIL: &str = "authorized@example.com";

    // Dispatcher keeping the last code in an inbox
    #[derive(Default)]
    struct Inbox {
        codes: Mutex<Vec<String>>,
    }

    impl Inbox {
        fn latest(&self) -> String {
            self.codes.lock().unwrap().last().cloned().unwrap()
        }

        fn count(&self) -> usize {
            self.codes.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl NotificationDispatcher for Inbox {
        async fn send_reset_code(
            &self,
            _email: &str,
            code: &str,
        ) -> Result<DispatchReceipt, DispatchError> {
            self.codes.lock().unwrap().push(code.to_string());
            Ok(DispatchReceipt {
                provider: "inbox".to_string(),
                message_id: None,
            })
        }

        fn provider_name(&self) -> &str {
            "inbox"
        }
    }

    struct Setup {
        codes: Arc<InMemoryResetCodeRepository>,
        accounts: Arc<InMemoryAccountRepository>,
        inbox: Arc<Inbox>,
        service: Arc<
            ResetCodeService<InMemoryResetCodeRepository, InMemoryAccountRepository, Inbox>,
        >,
    }

    fn setup() -> Setup {
        let codes = Arc::new(InMemoryResetCodeRepository::new());
        let accounts = Arc::new(InMemoryAccountRepository::with_accounts([AdminAccount::new(
            EMAIL,
            bcrypt::hash("oldpass", 4).unwrap(),
        )]));
        let inbox = Arc::new(Inbox::default());
        let service = Arc::new(ResetCodeService::new(
            codes.clone(),
            accounts.clone(),
            inbox.clone(),
            ResetCodeServiceConfig::new(EMAIL).with_hash_cost(4),
        ));
        Setup {
            codes,
            accounts,
            inbox,
            service,
        }
    }

    #[tokio::test]
    async fn test_reset_then_login_with_new_password() {
        let s = setup();
        let sessions = SessionService::new(s.accounts.clone(), &SessionConfig::default());
        let mut wizard = PasswordResetWizard::new(s.service.clone());

        wizard.submit_email(EMAIL).await.unwrap();
        wizard.submit_code(&s.inbox.latest()).await.unwrap();
        wizard.submit_password("newpass1", "newpass1").await.unwrap();
        assert_eq!(wizard.step(), ResetStep::Success);
        wizard.return_to_login();

        assert!(sessions.login(EMAIL, "newpass1").await.is_ok());
        assert!(sessions.login(EMAIL, "oldpass").await.is_err());
    }

    #[tokio::test]
    async fn test_short_code_rejected_before_lookup() {
        let s = setup();
        let mut wizard = PasswordResetWizard::new(s.service.clone());
        wizard.submit_email(EMAIL).await.unwrap();

        let result = wizard.submit_code("12").await;

        assert_eq!(result.unwrap_err(), ResetError::InvalidCodeFormat);
        assert_eq!(wizard.step(), ResetStep::Code);
        let stored = s.codes.find_by_email(EMAIL).await.unwrap();
        assert!(stored.iter().all(|c| !c.used));
        assert_eq!(s.inbox.count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resend_respects_cooldown() {
        let s = setup();
        let mut wizard = PasswordResetWizard::new(s.service.clone());
        wizard.submit_email(EMAIL).await.unwrap();

        assert!(matches!(
            wizard.resend_code().await,
            Err(ResetError::ResendCooldownActive { .. })
        ));
        assert_eq!(s.inbox.count(), 1);

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(wizard.resend_remaining(), Some(0));

        wizard.resend_code().await.unwrap();
        assert_eq!(s.inbox.count(), 2);
        assert_eq!(wizard.resend_remaining(), Some(60));
    }

    #[tokio::test]
    async fn test_only_newest_code_is_pending() {
        let s = setup();
        s.service.issue(EMAIL).await.unwrap();
        s.service.issue(EMAIL).await.unwrap();
        s.service.issue(EMAIL).await.unwrap();

        let stored = s.codes.find_by_email(EMAIL).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].code, s.inbox.latest());
    }

    #[tokio::test]
    async fn test_guessing_codes_locks_out_the_reset() {
        let s = setup();
        let mut wizard = PasswordResetWizard::new(s.service.clone());
        wizard.submit_email(EMAIL).await.unwrap();
        let code = s.inbox.latest();

        let guesses = (0..1_000_000u32)
            .map(|n| format!("{:06}", n))
            .filter(|guess| *guess != code);
        for guess in guesses.take(tr_core::domain::entities::MAX_ATTEMPTS as usize) {
            assert_eq!(
                wizard.submit_code(&guess).await.unwrap_err(),
                ResetError::CodeInvalidOrExpired
            );
        }

        assert_eq!(
            wizard.submit_code(&code).await.unwrap_err(),
            ResetError::CodeInvalidOrExpired
        );
        assert_eq!(wizard.step(), ResetStep::Code);
    }
}
