//! Notification actions - business logic functions
//!
//! Actions are async functions called directly from the HTTP route handlers.

mod notify_schedule_change;
mod send_visit_confirmation;

pub use notify_schedule_change::notify_schedule_change;
pub use send_visit_confirmation::{send_visit_confirmation, ConfirmationReceipt};

use anyhow::Context;

use crate::domains::notifications::errors::DispatchError;
use crate::domains::scheduling::models::{Party, Visit};
use crate::kernel::ServerDeps;

/// Require a request field; a missing, empty, or whitespace-only value
/// counts as absent.
fn require_field<'a>(
    value: Option<&'a str>,
    name: &'static str,
) -> Result<&'a str, DispatchError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DispatchError::MissingField(name)),
    }
}

/// Fetch the visit's client (required) and caregiver (optional) concurrently.
/// The two lookups are independent; neither waits on the other.
async fn fetch_visit_parties(
    deps: &ServerDeps,
    visit: &Visit,
) -> Result<(Party, Option<Party>), DispatchError> {
    let client_fut = deps.store.get_client(&visit.client_id);
    let caregiver_fut = async {
        match visit.caregiver_id.as_deref() {
            Some(id) => deps.store.get_caregiver(id).await,
            None => Ok(None),
        }
    };

    let (client, caregiver) =
        tokio::try_join!(client_fut, caregiver_fut).context("Failed to load visit parties")?;

    let client = client.ok_or_else(|| DispatchError::ClientNotFound(visit.id.clone()))?;

    Ok((client, caregiver))
}
