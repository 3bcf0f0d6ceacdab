//! PostgreSQL implementation of the ResetCodeRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgRow, PgPool, Row};
use tracing::{debug, error};
use uuid::Uuid;

use tr_core::domain::entities::ResetCode;
use tr_core::errors::RepositoryError;
use tr_core::repositories::ResetCodeRepository;
use tr_shared::utils::email::mask_email;

use super::map_sqlx_error;

/// Reset codes stored in the `password_reset_codes` table
pub struct PgResetCodeRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgResetCodeRepository {
    /// Create a new PostgreSQL reset code repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_code(row: &PgRow) -> Result<ResetCode, RepositoryError> {
        let field = |name: &str, e: sqlx::Error| {
            RepositoryError::query(format!("Failed to get {}: {}", name, e))
        };

        Ok(ResetCode {
            id: row.try_get::<Uuid, _>("id").map_err(|e| field("id", e))?,
            email: row.try_get("email").map_err(|e| field("email", e))?,
            code: row.try_get("code").map_err(|e| field("code", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| field("created_at", e))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| field("expires_at", e))?,
            used: row.try_get("used").map_err(|e| field("used", e))?,
            attempts: row.try_get("attempts").map_err(|e| field("attempts", e))?,
        })
    }
}

#[async_trait]
impl ResetCodeRepository for PgResetCodeRepository {
    async fn replace_for_email(&self, code: &ResetCode) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("Failed to open transaction", e))?;

        let deleted = sqlx::query("DELETE FROM password_reset_codes WHERE email = $1")
            .bind(&code.email)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!(
                    email = %mask_email(&code.email),
                    error = %e,
                    "Failed to delete previous reset codes"
                );
                map_sqlx_error("Failed to delete previous reset codes", e)
            })?
            .rows_affected();

        let query = r#"
            INSERT INTO password_reset_codes (
                id, email, code, created_at, expires_at, used, attempts
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#;

        sqlx::query(query)
            .bind(code.id)
            .bind(&code.email)
            .bind(&code.code)
            .bind(code.created_at)
            .bind(code.expires_at)
            .bind(code.used)
            .bind(code.attempts)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!(
                    email = %mask_email(&code.email),
                    error = %e,
                    "Failed to insert reset code"
                );
                map_sqlx_error("Failed to insert reset code", e)
            })?;

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error("Failed to commit reset code", e))?;

        debug!(
            email = %mask_email(&code.email),
            superseded = deleted,
            "Stored reset code"
        );
        Ok(())
    }

    async fn find_matching(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Vec<ResetCode>, RepositoryError> {
        let query = r#"
            SELECT id, email, code, created_at, expires_at, used, attempts
            FROM password_reset_codes
            WHERE email = $1 AND code = $2
            ORDER BY created_at
        "#;

        let rows = sqlx::query(query)
            .bind(email)
            .bind(code)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to look up reset code", e))?;

        rows.iter().map(Self::row_to_code).collect()
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<ResetCode>, RepositoryError> {
        let query = r#"
            SELECT id, email, code, created_at, expires_at, used, attempts
            FROM password_reset_codes
            WHERE email = $1
            ORDER BY created_at
        "#;

        let rows = sqlx::query(query)
            .bind(email)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to list reset codes", e))?;

        rows.iter().map(Self::row_to_code).collect()
    }

    async fn mark_used(&self, id: Uuid) -> Result<bool, RepositoryError> {
        // The `used = FALSE` guard makes concurrent redemptions race on the row
        let result = sqlx::query(
            "UPDATE password_reset_codes SET used = TRUE WHERE id = $1 AND used = FALSE",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to mark reset code as used", e))?;

        Ok(result.rows_affected() == 1)
    }

    async fn record_failed_attempt(
        &self,
        email: &str,
        max_attempts: i32,
    ) -> Result<bool, RepositoryError> {
        // SET expressions read the pre-update row, so `attempts + 1` is the new count
        let query = r#"
            UPDATE password_reset_codes
            SET attempts = attempts + 1,
                used = (attempts + 1 >= $2)
            WHERE email = $1 AND used = FALSE AND expires_at > NOW()
            RETURNING used
        "#;

        let retired: Vec<bool> = sqlx::query_scalar(query)
            .bind(email)
            .bind(max_attempts)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to record reset code attempt", e))?;

        Ok(retired.into_iter().any(|used| used))
    }
}
