//! Channel dispatch
//!
//! Ordered delivery attempts per recipient: SMS first when the transport is
//! configured, then email unconditionally. Every attempted channel yields
//! exactly one ledger entry.

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::domains::notifications::composer::ComposedMessage;
use crate::domains::notifications::models::{DeliveryMethod, DeliveryResult, DeliveryStatus};
use crate::domains::scheduling::models::Party;
use crate::kernel::{BaseMailService, BaseSmsService, ServerDeps};

/// Per-request view over the configured delivery channels
pub struct ChannelDispatcher<'a> {
    sms: Option<&'a dyn BaseSmsService>,
    mailer: &'a dyn BaseMailService,
}

impl<'a> ChannelDispatcher<'a> {
    pub fn new(sms: Option<&'a dyn BaseSmsService>, mailer: &'a dyn BaseMailService) -> Self {
        Self { sms, mailer }
    }

    pub fn from_deps(deps: &'a ServerDeps) -> Self {
        Self {
            sms: deps.sms.as_deref(),
            mailer: deps.mailer.as_ref(),
        }
    }

    /// Deliver one composed message to one recipient.
    ///
    /// An SMS failure is recorded in the ledger and absorbed; the email
    /// attempt always runs. An email failure propagates to the caller.
    /// An unconfigured SMS transport produces no SMS entry at all.
    pub async fn deliver(
        &self,
        recipient: &Party,
        message: &ComposedMessage,
    ) -> Result<Vec<DeliveryResult>> {
        let role = message.recipient;
        let mut results = Vec::new();

        // 1. SMS, only when the transport is configured
        if let Some(sms) = self.sms {
            match recipient.phone.as_deref() {
                Some(phone) => match sms.send_message(phone, &message.sms_body).await {
                    Ok(receipt) => {
                        info!("SMS sent to {} ({})", role.as_str(), receipt.sid);
                        results.push(DeliveryResult {
                            recipient: role,
                            method: DeliveryMethod::Sms,
                            status: DeliveryStatus::Sent,
                            reference_id: Some(receipt.sid),
                        });
                    }
                    Err(e) => {
                        warn!("SMS send to {} failed: {:#}", role.as_str(), e);
                        results.push(DeliveryResult {
                            recipient: role,
                            method: DeliveryMethod::Sms,
                            status: DeliveryStatus::Failed,
                            reference_id: None,
                        });
                    }
                },
                None => {
                    info!("No phone on file for {}; skipping SMS", role.as_str());
                    results.push(DeliveryResult {
                        recipient: role,
                        method: DeliveryMethod::Sms,
                        status: DeliveryStatus::Skipped,
                        reference_id: None,
                    });
                }
            }
        }

        // 2. Email always fires; a failure here is fatal to the request
        match recipient.email.as_deref() {
            Some(email) => {
                let receipt = self
                    .mailer
                    .send_email(email, &message.email_subject, &message.email_body)
                    .await
                    .context("Failed to send notification email")?;
                info!("Email sent to {} ({})", role.as_str(), receipt.message_id);
                results.push(DeliveryResult {
                    recipient: role,
                    method: DeliveryMethod::Email,
                    status: DeliveryStatus::Sent,
                    reference_id: Some(receipt.message_id),
                });
            }
            None => {
                info!("No email on file for {}; skipping email", role.as_str());
                results.push(DeliveryResult {
                    recipient: role,
                    method: DeliveryMethod::Email,
                    status: DeliveryStatus::Skipped,
                    reference_id: None,
                });
            }
        }

        Ok(results)
    }
}
