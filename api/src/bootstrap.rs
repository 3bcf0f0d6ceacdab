//! Wiring of repositories, dispatcher and services from configuration

use rand::{distributions::Alphanumeric, rngs::OsRng, Rng};
use std::sync::Arc;
use tracing::{info, warn};

use tr_core::domain::entities::AdminAccount;
use tr_core::repositories::{
    AccountRepository, InMemoryAccountRepository, InMemoryResetCodeRepository, ResetCodeRepository,
};
use tr_core::services::ResetCodeServiceConfig;
use tr_infra::database::{DatabasePool, PgAccountRepository, PgResetCodeRepository};
use tr_infra::email::create_dispatcher;
use tr_shared::config::AppConfig;
use tr_shared::utils::email::{mask_email, normalize_email};

use crate::state::AppState;

/// Variable holding the password given to the administrator account when
/// none exists yet
pub const ADMIN_INITIAL_PASSWORD_VAR: &str = "ADMIN_INITIAL_PASSWORD";

/// Build the application state
///
/// With a database configured the PostgreSQL repositories are used and the
/// schema is migrated; otherwise everything lives in memory.
pub async fn build_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let initial_password = std::env::var(ADMIN_INITIAL_PASSWORD_VAR).ok();
    let admin_email = normalize_email(&config.reset.authorized_email);

    let (codes, accounts, database): (
        Arc<dyn ResetCodeRepository>,
        Arc<dyn AccountRepository>,
        Option<DatabasePool>,
    ) = match &config.database {
            Some(db_config) => {
                let pool = DatabasePool::new(db_config.clone()).await?;
                pool.run_migrations().await?;

                let accounts = PgAccountRepository::new(pool.get_pool().clone());
                if accounts.find_by_email(&admin_email).await?.is_none() {
                    match &initial_password {
                        Some(password) => {
                            let hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;
                            accounts.upsert(&AdminAccount::new(&admin_email, hash)).await?;
                            info!(email = %mask_email(&admin_email), "Provisioned admin account");
                        }
                        None => warn!(
                            email = %mask_email(&admin_email),
                            "No admin account exists; set {} to create one",
                            ADMIN_INITIAL_PASSWORD_VAR
                        ),
                    }
                }

                info!("Using PostgreSQL repositories");
                (
                    Arc::new(PgResetCodeRepository::new(pool.get_pool().clone()))
                        as Arc<dyn ResetCodeRepository>,
                    Arc::new(accounts) as Arc<dyn AccountRepository>,
                    Some(pool),
                )
            }
            None => {
                let password = initial_password.unwrap_or_else(random_password);
                let hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)?;
                let accounts =
                    InMemoryAccountRepository::with_accounts([AdminAccount::new(&admin_email, hash)]);
                warn!("DATABASE_URL not set, using in-memory repositories");
                (
                    Arc::new(InMemoryResetCodeRepository::new()) as Arc<dyn ResetCodeRepository>,
                    Arc::new(accounts) as Arc<dyn AccountRepository>,
                    None,
                )
            }
        };

    let dispatcher = create_dispatcher(&config.email, &config.reset);
    info!(provider = dispatcher.provider_name(), "Email dispatcher ready");

    let state = AppState::new(
        codes,
        accounts,
        dispatcher,
        ResetCodeServiceConfig::from(&config.reset),
        &config.session,
        config.reset.resend_cooldown_seconds,
    )
    .with_max_active_resets(config.reset.max_active_resets);

    Ok(match database {
        Some(pool) => state.with_database(pool),
        None => state,
    })
}

/// Throwaway password for an in-memory admin; the reset flow replaces it
fn random_password() -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(24)
        .map(char::from)
        .collect()
}
