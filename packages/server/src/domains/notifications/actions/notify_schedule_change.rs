//! Schedule change notification action

use tracing::{info, warn};

use crate::domains::notifications::composer::{compose_for_caregiver, compose_for_client};
use crate::domains::notifications::dispatcher::ChannelDispatcher;
use crate::domains::notifications::errors::DispatchError;
use crate::domains::notifications::models::{
    ChangeType, DispatchReport, NotificationEvent, ScheduleChangeRequest,
};
use crate::domains::notifications::recipients::RecipientSet;
use crate::kernel::ServerDeps;

use super::{fetch_visit_parties, require_field};

/// Dispatch schedule change notifications to the affected parties and return
/// the per-channel delivery ledger.
///
/// SMS failures degrade the ledger without failing the request; an email
/// failure aborts the dispatch.
pub async fn notify_schedule_change(
    request: &ScheduleChangeRequest,
    deps: &ServerDeps,
) -> Result<DispatchReport, DispatchError> {
    // 1. Input shape check; the change kind is parsed here but only acted
    //    on once the lookups have succeeded
    let visit_id = require_field(request.visit_id.as_deref(), "visit_id")?;
    let change_type_raw = require_field(request.change_type.as_deref(), "change_type")?;
    let change_type = ChangeType::parse(change_type_raw);

    // 2. Load the visit, then its parties
    let visit = deps
        .store
        .get_visit(visit_id)
        .await?
        .ok_or_else(|| DispatchError::VisitNotFound(visit_id.to_string()))?;

    let (client, caregiver) = fetch_visit_parties(deps, &visit).await?;

    // 3. Unknown change kinds have no notification policy; the visit is known
    //    to exist, so report success with an empty ledger
    let Some(change_type) = change_type else {
        warn!(
            "No notification policy for change type '{}'; nothing dispatched",
            change_type_raw
        );
        return Ok(DispatchReport::empty());
    };

    let event = NotificationEvent {
        visit_id: visit.id.clone(),
        change_type,
        detail: request
            .change_details
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(String::from),
    };

    info!(
        "Dispatching {} notifications for visit {}",
        event.change_type, event.visit_id
    );

    // 4. Fixed recipient policy for this change kind
    let recipients = RecipientSet::for_change(event.change_type);
    let dispatcher = ChannelDispatcher::from_deps(deps);
    let detail = event.detail.as_deref();

    let mut ledger = Vec::new();

    // 5. Client first, then caregiver; each recipient appends one entry per
    //    attempted channel
    if recipients.notify_client {
        let message = compose_for_client(
            event.change_type,
            &visit,
            &client,
            caregiver.as_ref(),
            detail,
        );
        ledger.extend(dispatcher.deliver(&client, &message).await?);
    }

    if recipients.notify_caregiver {
        match caregiver.as_ref() {
            Some(caregiver) => {
                let message =
                    compose_for_caregiver(event.change_type, &visit, caregiver, &client, detail);
                ledger.extend(dispatcher.deliver(caregiver, &message).await?);
            }
            None => {
                // Cannot notify a caregiver who has not been assigned yet
                info!(
                    "Visit {} has no caregiver; skipping caregiver notification",
                    visit.id
                );
            }
        }
    }

    info!(
        "Dispatch complete for visit {}: {} ledger entries",
        visit.id,
        ledger.len()
    );

    Ok(DispatchReport {
        success: true,
        notifications_sent: ledger,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::notifications::models::{DeliveryMethod, DeliveryStatus, RecipientRole};
    use crate::domains::scheduling::models::{Party, Visit};
    use crate::kernel::test_dependencies::{InMemoryCareStore, MockSmsService, TestDependencies};
    use chrono::{NaiveDate, NaiveTime};

    fn visit(caregiver_id: Option<&str>) -> Visit {
        Visit {
            id: "visit-1001".to_string(),
            client_id: "client-2001".to_string(),
            caregiver_id: caregiver_id.map(String::from),
            visit_date: NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
            scheduled_start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            scheduled_end_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
        }
    }

    fn client() -> Party {
        Party {
            id: "client-2001".to_string(),
            first_name: "Maria".to_string(),
            last_name: "Alvarez".to_string(),
            phone: Some("+15555550111".to_string()),
            email: Some("maria@example.com".to_string()),
            address: Some("425 Lakewood Ave".to_string()),
            city: Some("Saint Paul".to_string()),
            state: Some("MN".to_string()),
            zip: Some("55104".to_string()),
        }
    }

    fn caregiver() -> Party {
        Party {
            id: "cg-3001".to_string(),
            first_name: "James".to_string(),
            last_name: "Okafor".to_string(),
            phone: Some("+15555550122".to_string()),
            email: Some("james@example.com".to_string()),
            address: None,
            city: None,
            state: None,
            zip: None,
        }
    }

    fn request(change_type: &str) -> ScheduleChangeRequest {
        ScheduleChangeRequest {
            visit_id: Some("visit-1001".to_string()),
            change_type: Some(change_type.to_string()),
            change_details: None,
        }
    }

    fn full_deps() -> TestDependencies {
        TestDependencies::new().mock_store(
            InMemoryCareStore::new()
                .with_visit(visit(Some("cg-3001")))
                .with_client(client())
                .with_caregiver(caregiver()),
        )
    }

    #[tokio::test]
    async fn cancellation_notifies_both_parties_over_both_channels() {
        let test_deps = full_deps();
        let deps = test_deps.clone().into_deps();

        let report = notify_schedule_change(&request("cancellation"), &deps)
            .await
            .unwrap();

        assert!(report.success);
        assert_eq!(report.notifications_sent.len(), 4);
        assert!(test_deps.sms.was_sent_to("+15555550111"));
        assert!(test_deps.sms.was_sent_to("+15555550122"));
        assert!(test_deps.mailer.was_sent_to("maria@example.com"));
        assert!(test_deps.mailer.was_sent_to("james@example.com"));
    }

    #[tokio::test]
    async fn caregiver_change_notifies_the_client_only() {
        let deps = full_deps().into_deps();

        let report = notify_schedule_change(&request("caregiver_change"), &deps)
            .await
            .unwrap();

        assert!(report
            .notifications_sent
            .iter()
            .all(|r| r.recipient == RecipientRole::Client));
        assert_eq!(report.notifications_sent.len(), 2);
    }

    #[tokio::test]
    async fn unrecognized_change_type_is_a_success_with_an_empty_ledger() {
        let deps = full_deps().into_deps();

        let report = notify_schedule_change(&request("visit_note_added"), &deps)
            .await
            .unwrap();

        assert!(report.success);
        assert!(report.notifications_sent.is_empty());
    }

    #[tokio::test]
    async fn unrecognized_change_type_with_an_unknown_visit_is_not_found() {
        let deps = TestDependencies::new().into_deps();

        let err = notify_schedule_change(&request("visit_note_added"), &deps)
            .await
            .unwrap_err();

        assert!(matches!(err, DispatchError::VisitNotFound(id) if id == "visit-1001"));
    }

    #[tokio::test]
    async fn new_assignment_without_a_caregiver_yields_an_empty_ledger() {
        let test_deps = TestDependencies::new().mock_store(
            InMemoryCareStore::new()
                .with_visit(visit(None))
                .with_client(client()),
        );
        let deps = test_deps.clone().into_deps();

        let report = notify_schedule_change(&request("new_assignment"), &deps)
            .await
            .unwrap();

        assert!(report.success);
        assert!(report.notifications_sent.is_empty());
        assert!(test_deps.sms.sent().is_empty());
        assert!(test_deps.mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn unconfigured_sms_leaves_only_email_entries() {
        let deps = full_deps().into_deps_without_sms();

        let report = notify_schedule_change(&request("time_change"), &deps)
            .await
            .unwrap();

        assert_eq!(report.notifications_sent.len(), 2);
        assert!(report
            .notifications_sent
            .iter()
            .all(|r| r.method == DeliveryMethod::Email && r.status == DeliveryStatus::Sent));
    }

    #[tokio::test]
    async fn failed_sms_degrades_the_ledger_but_email_still_lands() {
        let test_deps = full_deps().mock_sms(MockSmsService::failing());
        let deps = test_deps.clone().into_deps();

        let report = notify_schedule_change(&request("caregiver_change"), &deps)
            .await
            .unwrap();

        assert!(report.success);
        let sms_entry = report
            .notifications_sent
            .iter()
            .find(|r| r.method == DeliveryMethod::Sms)
            .unwrap();
        assert_eq!(sms_entry.status, DeliveryStatus::Failed);
        assert!(test_deps.mailer.was_sent_to("maria@example.com"));
    }

    #[tokio::test]
    async fn missing_visit_is_not_found() {
        let deps = TestDependencies::new().into_deps();

        let err = notify_schedule_change(&request("cancellation"), &deps)
            .await
            .unwrap_err();

        assert!(matches!(err, DispatchError::VisitNotFound(id) if id == "visit-1001"));
    }

    #[tokio::test]
    async fn blank_detail_falls_back_to_the_template_filler() {
        let test_deps = full_deps();
        let deps = test_deps.clone().into_deps();
        let mut req = request("cancellation");
        req.change_details = Some("   ".to_string());

        notify_schedule_change(&req, &deps).await.unwrap();

        let client_sms = &test_deps.sms.sent()[0];
        assert!(client_sms
            .body
            .contains("Our team will contact you to reschedule."));
    }

    #[tokio::test]
    async fn padded_detail_reaches_the_message_untrimmed() {
        let test_deps = full_deps();
        let deps = test_deps.clone().into_deps();
        let mut req = request("cancellation");
        req.change_details = Some("  Gate code is 4321.  ".to_string());

        notify_schedule_change(&req, &deps).await.unwrap();

        let client_sms = &test_deps.sms.sent()[0];
        assert!(client_sms.body.ends_with("  Gate code is 4321.  "));
    }
}
