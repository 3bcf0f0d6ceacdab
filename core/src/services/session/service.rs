//! Session registry backed by the admin account store

use chrono::Duration;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tr_shared::config::SessionConfig;
use tr_shared::utils::email::{mask_email, normalize_email};

use crate::domain::entities::session::Session;
use crate::errors::AuthError;
use crate::repositories::AccountRepository;
use crate::services::password::verify_password;

/// Issues and checks administrator sessions
///
/// Sessions live in process memory; the registry starts empty and a restart
/// logs everyone out.
pub struct SessionService<A: ?Sized> {
    accounts: Arc<A>,
    sessions: RwLock<HashMap<String, Session>>,
    ttl: Duration,
}

impl<A> SessionService<A>
where
    A: AccountRepository + ?Sized,
{
    pub fn new(accounts: Arc<A>, config: &SessionConfig) -> Self {
        Self {
            accounts,
            sessions: RwLock::new(HashMap::new()),
            ttl: Duration::seconds(config.timeout as i64),
        }
    }

    /// Check credentials and open a session
    ///
    /// Unknown addresses and wrong passwords fail the same way.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let email = normalize_email(email);
        let account = self.accounts.find_by_email(&email).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to load admin account");
            AuthError::from(e)
        })?;

        let Some(account) = account else {
            tracing::warn!(
                email = %mask_email(&email),
                event = "login_failed",
                "Login attempt for unknown account"
            );
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(password, &account.password_hash).await {
            tracing::warn!(
                email = %mask_email(&email),
                event = "login_failed",
                "Login attempt with wrong password"
            );
            return Err(AuthError::InvalidCredentials);
        }

        let session = Session::open(account.email, self.ttl);
        self.sessions
            .write()
            .await
            .insert(session.token.clone(), session.clone());

        tracing::info!(
            email = %mask_email(&session.email),
            expires_at = %session.expires_at,
            event = "login_success",
            "Admin logged in"
        );
        Ok(session)
    }

    /// Look up a live session by token
    ///
    /// An expired session is evicted on sight.
    pub async fn validate(&self, token: &str) -> Result<Session, AuthError> {
        let session = self.sessions.read().await.get(token).cloned();
        match session {
            Some(session) if !session.is_expired() => Ok(session),
            Some(_) => {
                self.sessions.write().await.remove(token);
                tracing::debug!(event = "session_expired", "Evicted expired session");
                Err(AuthError::InvalidSession)
            }
            None => Err(AuthError::InvalidSession),
        }
    }

    /// End the session; returns whether it existed
    pub async fn logout(&self, token: &str) -> bool {
        let removed = self.sessions.write().await.remove(token);
        if let Some(session) = &removed {
            tracing::info!(
                email = %mask_email(&session.email),
                event = "logout",
                "Admin logged out"
            );
        }
        removed.is_some()
    }

    /// End every session held by `email`; returns how many were ended
    pub async fn revoke_all_for(&self, email: &str) -> usize {
        let email = normalize_email(email);
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.email != email);
        let revoked = before - sessions.len();
        if revoked > 0 {
            tracing::info!(
                email = %mask_email(&email),
                revoked,
                event = "sessions_revoked",
                "Admin sessions revoked"
            );
        }
        revoked
    }

    /// Number of unexpired sessions
    pub async fn active_sessions(&self) -> usize {
        self.sessions
            .read()
            .await
            .values()
            .filter(|s| !s.is_expired())
            .count()
    }
}
