//! In-memory implementation of ResetCodeRepository

use async_trait::async_trait;
use chrono::Utc;
use constant_time_eq::constant_time_eq;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::reset_code::ResetCode;
use crate::errors::RepositoryError;

use super::trait_::ResetCodeRepository;

/// Reset code store held in process memory
#[derive(Clone, Default)]
pub struct InMemoryResetCodeRepository {
    codes: Arc<RwLock<Vec<ResetCode>>>,
}

impl InMemoryResetCodeRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record without superseding existing ones
    pub async fn insert_raw(&self, code: ResetCode) {
        self.codes.write().await.push(code);
    }

    /// Number of stored records, used or not
    pub async fn len(&self) -> usize {
        self.codes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.codes.read().await.is_empty()
    }
}

#[async_trait]
impl ResetCodeRepository for InMemoryResetCodeRepository {
    async fn replace_for_email(&self, code: &ResetCode) -> Result<(), RepositoryError> {
        let mut codes = self.codes.write().await;
        codes.retain(|c| c.email != code.email);
        codes.push(code.clone());
        Ok(())
    }

    async fn find_matching(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Vec<ResetCode>, RepositoryError> {
        let codes = self.codes.read().await;
        Ok(codes
            .iter()
            .filter(|c| c.email == email && constant_time_eq(c.code.as_bytes(), code.as_bytes()))
            .cloned()
            .collect())
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<ResetCode>, RepositoryError> {
        let codes = self.codes.read().await;
        Ok(codes.iter().filter(|c| c.email == email).cloned().collect())
    }

    async fn mark_used(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut codes = self.codes.write().await;
        match codes.iter_mut().find(|c| c.id == id && !c.used) {
            Some(code) => {
                code.mark_used();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn record_failed_attempt(
        &self,
        email: &str,
        max_attempts: i32,
    ) -> Result<bool, RepositoryError> {
        let now = Utc::now();
        let mut codes = self.codes.write().await;
        let mut retired = false;
        for code in codes
            .iter_mut()
            .filter(|c| c.email == email && c.is_usable_at(now))
        {
            retired |= code.record_failed_attempt(max_attempts);
        }
        Ok(retired)
    }
}
