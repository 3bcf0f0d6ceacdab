//! Password reset endpoints
//!
//! A reset is started with `POST /api/v1/password-reset`, which returns a
//! `reset_id`. Every later step addresses that id. Only one request per
//! reset is processed at a time; a concurrent one gets 409.

pub mod cancel;
pub mod resend_code;
pub mod start;
pub mod status;
pub mod submit_code;
pub mod submit_email;
pub mod submit_password;

pub use cancel::cancel;
pub use resend_code::resend_code;
pub use start::start;
pub use status::status;
pub use submit_code::submit_code;
pub use submit_email::submit_email;
pub use submit_password::submit_password;

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

use tr_shared::utils::email::mask_email;

use crate::dto::ResetStatusResponse;
use crate::handlers::ApiError;
use crate::state::{AppState, DynWizard};

/// Lock the wizard registered under `id` without waiting
pub(crate) async fn acquire(
    state: &AppState,
    id: Uuid,
) -> Result<OwnedMutexGuard<DynWizard>, ApiError> {
    let wizard: Arc<Mutex<DynWizard>> = state.wizards.get(id).await.ok_or(ApiError::ResetNotFound)?;
    wizard
        .try_lock_owned()
        .map_err(|_| ApiError::RequestInProgress)
}

pub(crate) fn status_of(
    id: Uuid,
    wizard: &DynWizard,
    code_expires_at: Option<DateTime<Utc>>,
) -> ResetStatusResponse {
    let resend_after = wizard.resend_remaining();
    ResetStatusResponse {
        reset_id: id,
        step: wizard.step(),
        email: wizard.state().email().map(mask_email),
        resend_after,
        can_resend: resend_after.map(|remaining| remaining == 0),
        code_expires_at,
    }
}
