use serde::{Deserialize, Serialize};

/// Who a notification was addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipientRole {
    Client,
    Caregiver,
}

impl RecipientRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Caregiver => "caregiver",
        }
    }
}

/// Delivery channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    Sms,
    Email,
}

/// Outcome of one delivery attempt.
///
/// - **Sent**: the transport accepted the message
/// - **Skipped**: the channel is configured but the recipient has no
///   contact value for it
/// - **Failed**: the transport rejected the message (SMS only; email
///   failures abort the dispatch instead)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sent,
    Skipped,
    Failed,
}

/// One line of the delivery ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryResult {
    pub recipient: RecipientRole,
    pub method: DeliveryMethod,
    pub status: DeliveryStatus,
    /// Provider reference (Twilio message sid, mail provider id) when sent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
}

/// Itemized outcome of one dispatch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchReport {
    pub success: bool,
    pub notifications_sent: Vec<DeliveryResult>,
}

impl DispatchReport {
    /// A successful run that had nobody to notify
    pub fn empty() -> Self {
        Self {
            success: true,
            notifications_sent: vec![],
        }
    }
}
