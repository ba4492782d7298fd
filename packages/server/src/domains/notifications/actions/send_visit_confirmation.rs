//! Visit confirmation SMS action

use anyhow::Context;
use tracing::info;

use crate::domains::notifications::composer::confirmation_sms_body;
use crate::domains::notifications::errors::DispatchError;
use crate::domains::notifications::models::VisitConfirmationRequest;
use crate::kernel::ServerDeps;

use super::{fetch_visit_parties, require_field};

/// Receipt for a delivered confirmation SMS
#[derive(Debug, Clone)]
pub struct ConfirmationReceipt {
    pub message_sid: String,
}

/// Send the client a confirmation SMS for an upcoming visit.
///
/// Confirmations have no email fallback: an unconfigured SMS transport is a
/// configuration failure here, not a degraded send.
pub async fn send_visit_confirmation(
    request: &VisitConfirmationRequest,
    deps: &ServerDeps,
) -> Result<ConfirmationReceipt, DispatchError> {
    // 1. Input shape check
    let visit_id = require_field(request.visit_id.as_deref(), "visit_id")?;

    // 2. SMS transport is required for this endpoint
    let sms = deps.sms.as_ref().ok_or(DispatchError::SmsNotConfigured)?;

    // 3. Load the visit and parties
    let visit = deps
        .store
        .get_visit(visit_id)
        .await?
        .ok_or_else(|| DispatchError::VisitNotFound(visit_id.to_string()))?;

    let (client, caregiver) = fetch_visit_parties(deps, &visit).await?;

    let phone = client.phone.as_deref().ok_or_else(|| {
        DispatchError::InternalError(anyhow::anyhow!(
            "Client {} has no phone number on file",
            client.id
        ))
    })?;

    // 4. Compose and send
    let body = confirmation_sms_body(&visit, &client, caregiver.as_ref());
    let receipt = sms
        .send_message(phone, &body)
        .await
        .context("Failed to send confirmation SMS")?;

    info!(
        "Confirmation SMS sent for visit {} ({})",
        visit.id, receipt.sid
    );

    Ok(ConfirmationReceipt {
        message_sid: receipt.sid,
    })
}
