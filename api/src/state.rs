//! Application state shared by all handlers

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use tr_core::repositories::{AccountRepository, ResetCodeRepository};
use tr_core::services::{NotificationDispatcher, PasswordResetWizard, ResetCodeService, SessionService};
use tr_infra::database::DatabasePool;

use crate::handlers::ApiError;

pub type DynResetCodeService =
    ResetCodeService<dyn ResetCodeRepository, dyn AccountRepository, dyn NotificationDispatcher>;
pub type DynWizard =
    PasswordResetWizard<dyn ResetCodeRepository, dyn AccountRepository, dyn NotificationDispatcher>;
pub type DynSessionService = SessionService<dyn AccountRepository>;

/// Wizards untouched for this long are dropped on the next insert
pub const WIZARD_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Live wizards allowed when no other limit is configured
pub const DEFAULT_MAX_ACTIVE_RESETS: usize = 64;

struct WizardEntry {
    wizard: Arc<Mutex<DynWizard>>,
    last_used: Instant,
}

/// Live password reset wizards, addressed by reset id
///
/// Each wizard sits behind its own mutex; a request that finds it locked is
/// turned away instead of queued. At most `capacity` wizards are live at
/// once.
pub struct WizardRegistry {
    entries: RwLock<HashMap<Uuid, WizardEntry>>,
    capacity: usize,
}

impl Default for WizardRegistry {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_ACTIVE_RESETS)
    }
}

impl WizardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Register `wizard` and return its id
    ///
    /// Idle wizards are dropped first; if the registry is still full the
    /// wizard is refused with `TooManyResets`.
    pub async fn insert(&self, wizard: DynWizard) -> Result<Uuid, ApiError> {
        let id = Uuid::new_v4();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, e| e.last_used.elapsed() < WIZARD_IDLE_TIMEOUT);
        if entries.len() < before {
            tracing::debug!(evicted = before - entries.len(), "Dropped idle reset wizards");
        }
        if entries.len() >= self.capacity {
            tracing::warn!(
                capacity = self.capacity,
                event = "reset_registry_full",
                "Refusing new password reset"
            );
            return Err(ApiError::TooManyResets);
        }
        entries.insert(
            id,
            WizardEntry {
                wizard: Arc::new(Mutex::new(wizard)),
                last_used: Instant::now(),
            },
        );
        Ok(id)
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<Mutex<DynWizard>>> {
        let mut entries = self.entries.write().await;
        let entry = entries.get_mut(&id)?;
        entry.last_used = Instant::now();
        Some(entry.wizard.clone())
    }

    pub async fn remove(&self, id: Uuid) -> Option<Arc<Mutex<DynWizard>>> {
        self.entries.write().await.remove(&id).map(|e| e.wizard)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

/// Application state that holds shared services
pub struct AppState {
    pub reset_service: Arc<DynResetCodeService>,
    pub sessions: Arc<DynSessionService>,
    pub wizards: WizardRegistry,
    pub resend_cooldown_seconds: u32,
    /// Pool backing the repositories, when PostgreSQL is in use
    pub database: Option<DatabasePool>,
}

impl AppState {
    pub fn new(
        codes: Arc<dyn ResetCodeRepository>,
        accounts: Arc<dyn AccountRepository>,
        dispatcher: Arc<dyn NotificationDispatcher>,
        reset_config: tr_core::services::ResetCodeServiceConfig,
        session_config: &tr_shared::config::SessionConfig,
        resend_cooldown_seconds: u32,
    ) -> Self {
        Self {
            reset_service: Arc::new(ResetCodeService::new(
                codes,
                accounts.clone(),
                dispatcher,
                reset_config,
            )),
            sessions: Arc::new(SessionService::new(accounts, session_config)),
            wizards: WizardRegistry::new(),
            resend_cooldown_seconds,
            database: None,
        }
    }

    pub fn with_database(mut self, pool: DatabasePool) -> Self {
        self.database = Some(pool);
        self
    }

    /// Cap the number of resets in progress at once
    pub fn with_max_active_resets(mut self, capacity: usize) -> Self {
        self.wizards = WizardRegistry::with_capacity(capacity);
        self
    }

    /// Fresh wizard at the Email step
    pub fn new_wizard(&self) -> DynWizard {
        PasswordResetWizard::new(self.reset_service.clone())
            .with_resend_cooldown(self.resend_cooldown_seconds)
    }
}
