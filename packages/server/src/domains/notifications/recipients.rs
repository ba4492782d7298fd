//! Recipient resolution policy

use crate::domains::notifications::models::ChangeType;

/// Which parties a change notifies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipientSet {
    pub notify_client: bool,
    pub notify_caregiver: bool,
}

impl RecipientSet {
    /// The fixed policy per change kind:
    /// - **caregiver_change**: client only
    /// - **time_change**: both parties
    /// - **cancellation**: both parties
    /// - **new_assignment**: caregiver only
    pub fn for_change(change: ChangeType) -> Self {
        match change {
            ChangeType::CaregiverChange => Self {
                notify_client: true,
                notify_caregiver: false,
            },
            ChangeType::TimeChange => Self {
                notify_client: true,
                notify_caregiver: true,
            },
            ChangeType::Cancellation => Self {
                notify_client: true,
                notify_caregiver: true,
            },
            ChangeType::NewAssignment => Self {
                notify_client: false,
                notify_caregiver: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caregiver_change_notifies_client_only() {
        let set = RecipientSet::for_change(ChangeType::CaregiverChange);
        assert!(set.notify_client);
        assert!(!set.notify_caregiver);
    }

    #[test]
    fn time_change_and_cancellation_notify_both() {
        for change in [ChangeType::TimeChange, ChangeType::Cancellation] {
            let set = RecipientSet::for_change(change);
            assert!(set.notify_client);
            assert!(set.notify_caregiver);
        }
    }

    #[test]
    fn new_assignment_notifies_caregiver_only() {
        let set = RecipientSet::for_change(ChangeType::NewAssignment);
        assert!(!set.notify_client);
        assert!(set.notify_caregiver);
    }
}
