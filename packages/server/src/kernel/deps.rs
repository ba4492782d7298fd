//! Server dependencies for effects (using traits for testability)
//!
//! This module provides the central dependency container used by all domain effects.
//! All external services use trait abstractions to enable testing.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use twilio::TwilioService;

use crate::kernel::{BaseCareStore, BaseMailService, BaseSmsService, SmsReceipt};

// =============================================================================
// TwilioService Adapter (implements BaseSmsService trait)
// =============================================================================

/// Wrapper around TwilioService that implements BaseSmsService trait
pub struct TwilioAdapter(pub Arc<TwilioService>);

impl TwilioAdapter {
    pub fn new(service: Arc<TwilioService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BaseSmsService for TwilioAdapter {
    async fn send_message(&self, to: &str, body: &str) -> Result<SmsReceipt> {
        self.0
            .send_message(to, body)
            .await
            .map(|message| SmsReceipt { sid: message.sid })
            .map_err(|e| anyhow::anyhow!("{}", e))
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to effects (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub store: Arc<dyn BaseCareStore>,
    /// SMS transport, present only when Twilio credentials are configured.
    /// `None` disables the SMS channel for the whole service.
    pub sms: Option<Arc<dyn BaseSmsService>>,
    pub mailer: Arc<dyn BaseMailService>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        store: Arc<dyn BaseCareStore>,
        sms: Option<Arc<dyn BaseSmsService>>,
        mailer: Arc<dyn BaseMailService>,
    ) -> Self {
        Self { store, sms, mailer }
    }
}
