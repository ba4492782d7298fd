// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "notify schedule change") should be domain functions
// that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseSmsService, BaseMailService)

use anyhow::Result;
use async_trait::async_trait;

use crate::domains::scheduling::models::{Party, Visit};

// =============================================================================
// SMS Service Trait (Infrastructure)
// =============================================================================

/// Receipt for an SMS accepted by the transport
#[derive(Debug, Clone)]
pub struct SmsReceipt {
    pub sid: String,
}

#[async_trait]
pub trait BaseSmsService: Send + Sync {
    /// Send a text message to an E.164 phone number
    async fn send_message(&self, to: &str, body: &str) -> Result<SmsReceipt>;
}

// =============================================================================
// Mail Service Trait (Infrastructure)
// =============================================================================

/// Receipt for an email accepted by the provider
#[derive(Debug, Clone)]
pub struct MailReceipt {
    pub message_id: String,
}

#[async_trait]
pub trait BaseMailService: Send + Sync {
    /// Send an HTML email to a single address
    async fn send_email(&self, to: &str, subject: &str, html_body: &str) -> Result<MailReceipt>;
}

// =============================================================================
// Care Store Trait (Infrastructure - hosted care platform reads)
// =============================================================================

#[async_trait]
pub trait BaseCareStore: Send + Sync {
    /// Fetch a visit record by id (None when the platform has no such record)
    async fn get_visit(&self, id: &str) -> Result<Option<Visit>>;

    /// Fetch a client record by id
    async fn get_client(&self, id: &str) -> Result<Option<Party>>;

    /// Fetch a caregiver record by id
    async fn get_caregiver(&self, id: &str) -> Result<Option<Party>>;
}
