//! PostgreSQL implementation of the AccountRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use tr_core::domain::entities::AdminAccount;
use tr_core::errors::RepositoryError;
use tr_core::repositories::AccountRepository;

use super::map_sqlx_error;

/// Admin credentials stored in the `admin_user` table
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert the account, or overwrite its hash if the email exists
    ///
    /// Used to provision the first administrator.
    pub async fn upsert(&self, account: &AdminAccount) -> Result<(), RepositoryError> {
        let query = r#"
            INSERT INTO admin_user (email, password_hash, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (email)
            DO UPDATE SET password_hash = EXCLUDED.password_hash,
                          updated_at = EXCLUDED.updated_at
        "#;

        sqlx::query(query)
            .bind(&account.email)
            .bind(&account.password_hash)
            .bind(account.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to save admin account", e))?;
        Ok(())
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminAccount>, RepositoryError> {
        let row = sqlx::query(
            "SELECT email, password_hash, updated_at FROM admin_user WHERE email = $1 LIMIT 1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to load admin account", e))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let field = |name: &str, e: sqlx::Error| {
            RepositoryError::query(format!("Failed to get {}: {}", name, e))
        };
        Ok(Some(AdminAccount {
            email: row.try_get("email").map_err(|e| field("email", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| field("password_hash", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| field("updated_at", e))?,
        }))
    }

    async fn update_password(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            "UPDATE admin_user SET password_hash = $1, updated_at = NOW() WHERE email = $2",
        )
        .bind(password_hash)
        .bind(email)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to update admin password", e))?;

        Ok(result.rows_affected())
    }
}
