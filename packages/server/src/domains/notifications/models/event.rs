use serde::{Deserialize, Serialize};

/// The schedule change kinds this service knows how to announce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    CaregiverChange,
    TimeChange,
    Cancellation,
    NewAssignment,
}

impl ChangeType {
    /// Parse a wire value. Unknown values return None; callers treat that as
    /// "no notification policy", not as an error.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "caregiver_change" => Some(Self::CaregiverChange),
            "time_change" => Some(Self::TimeChange),
            "cancellation" => Some(Self::Cancellation),
            "new_assignment" => Some(Self::NewAssignment),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CaregiverChange => "caregiver_change",
            Self::TimeChange => "time_change",
            Self::Cancellation => "cancellation",
            Self::NewAssignment => "new_assignment",
        }
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated schedule change, ready for dispatch
#[derive(Debug, Clone)]
pub struct NotificationEvent {
    pub visit_id: String,
    pub change_type: ChangeType,
    pub detail: Option<String>,
}

// =============================================================================
// Wire types
// =============================================================================

// Request fields are optional so that a missing field produces this service's
// own 400 response instead of an axum deserialization rejection.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleChangeRequest {
    pub visit_id: Option<String>,
    pub change_type: Option<String>,
    pub change_details: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitConfirmationRequest {
    pub visit_id: Option<String>,
}
