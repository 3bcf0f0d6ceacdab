//! In-memory implementation of AccountRepository

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::admin_account::AdminAccount;
use crate::errors::RepositoryError;

use super::trait_::AccountRepository;

/// Admin account store held in process memory
#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<String, AdminAccount>>>,
}

impl InMemoryAccountRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with `accounts`
    pub fn with_accounts(accounts: impl IntoIterator<Item = AdminAccount>) -> Self {
        let accounts = accounts
            .into_iter()
            .map(|a| (a.email.clone(), a))
            .collect();
        Self {
            accounts: Arc::new(RwLock::new(accounts)),
        }
    }

    /// Add or replace an account
    pub async fn upsert(&self, account: AdminAccount) {
        self.accounts
            .write()
            .await
            .insert(account.email.clone(), account);
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminAccount>, RepositoryError> {
        Ok(self.accounts.read().await.get(email).cloned())
    }

    async fn update_password(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<u64, RepositoryError> {
        let mut accounts = self.accounts.write().await;
        match accounts.get_mut(email) {
            Some(account) => {
                account.password_hash = password_hash.to_string();
                account.updated_at = Utc::now();
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
