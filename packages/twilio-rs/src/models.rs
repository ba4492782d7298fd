use serde::{Deserialize, Serialize};

/// Subset of the Message resource Twilio returns on creation. The `sid` is
/// the durable reference for the queued message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub sid: String,
    pub status: String,
    pub to: String,
}
