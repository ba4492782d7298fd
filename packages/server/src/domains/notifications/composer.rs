//! Message composition
//!
//! Pure functions mapping (change kind, visit, parties, free-text detail) to
//! per-recipient message bodies. No I/O here; the dispatcher owns delivery.

use chrono::{NaiveDate, NaiveTime};

use crate::domains::notifications::models::{ChangeType, RecipientRole};
use crate::domains::scheduling::models::{Party, Visit};

/// Placeholder shown wherever a caregiver name would appear on an
/// unassigned visit
pub const CAREGIVER_TBD: &str = "TBD";

const SIGNATURE: &str = "Harbor Home Health";

/// Channel-specific message bodies for one recipient
#[derive(Debug, Clone)]
pub struct ComposedMessage {
    pub recipient: RecipientRole,
    pub sms_body: String,
    pub email_subject: String,
    pub email_body: String,
}

/// Render a visit date the way it appears in every message: short weekday,
/// month, unpadded day ("Tue, Jan 16"). The stored local date is used as-is.
pub fn format_visit_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

fn format_time_range(visit: &Visit) -> String {
    format!(
        "{} - {}",
        format_time(visit.scheduled_start_time),
        format_time(visit.scheduled_end_time)
    )
}

/// Free-text detail is appended verbatim; absent detail falls back to a
/// per-template filler sentence.
fn detail_or(detail: Option<&str>, filler: &str) -> String {
    match detail {
        Some(d) => d.to_string(),
        None => filler.to_string(),
    }
}

// =============================================================================
// Client-facing messages
// =============================================================================

pub fn compose_for_client(
    change: ChangeType,
    visit: &Visit,
    client: &Party,
    caregiver: Option<&Party>,
    detail: Option<&str>,
) -> ComposedMessage {
    let date = format_visit_date(visit.visit_date);
    let times = format_time_range(visit);
    let caregiver_name = caregiver
        .map(Party::full_name)
        .unwrap_or_else(|| CAREGIVER_TBD.to_string());

    let sms_body = match change {
        ChangeType::Cancellation => format!(
            "Hi {}, your visit on {} has been cancelled. {}",
            client.first_name,
            date,
            detail_or(detail, "Our team will contact you to reschedule.")
        ),
        ChangeType::CaregiverChange => format!(
            "Hi {}, your visit on {} has a caregiver update: {} will now be your caregiver. {}",
            client.first_name,
            date,
            caregiver_name,
            detail_or(detail, "Please call our office with any questions.")
        ),
        ChangeType::TimeChange => format!(
            "Hi {}, your visit on {} has been rescheduled to {}. {}",
            client.first_name,
            date,
            times,
            detail_or(detail, "Please review your updated schedule.")
        ),
        // The resolver never requests a client message for a new assignment;
        // a generic update keeps the match total.
        ChangeType::NewAssignment => format!(
            "Hi {}, there is an update to your visit on {}. {}",
            client.first_name,
            date,
            detail_or(detail, "Please call our office with any questions.")
        ),
    };

    let lead = match change {
        ChangeType::Cancellation => "Your upcoming visit has been cancelled.",
        ChangeType::CaregiverChange => "There is a caregiver update for your upcoming visit.",
        ChangeType::TimeChange => "Your upcoming visit has been rescheduled.",
        ChangeType::NewAssignment => "There is an update to your upcoming visit.",
    };

    let detail_block = detail
        .map(|d| format!("<p><strong>Note:</strong> {}</p>", d))
        .unwrap_or_default();

    let email_body = format!(
        "<p>Hi {first},</p>\
         <p>{lead}</p>\
         <ul>\
         <li><strong>Date:</strong> {date}</li>\
         <li><strong>Time:</strong> {times}</li>\
         <li><strong>Caregiver:</strong> {caregiver}</li>\
         </ul>\
         {detail_block}\
         <p>Thank you,<br/>{signature}</p>",
        first = client.first_name,
        lead = lead,
        date = date,
        times = times,
        caregiver = caregiver_name,
        detail_block = detail_block,
        signature = SIGNATURE,
    );

    ComposedMessage {
        recipient: RecipientRole::Client,
        sms_body,
        email_subject: format!("Schedule Update - {}", date),
        email_body,
    }
}

// =============================================================================
// Caregiver-facing messages
// =============================================================================

pub fn compose_for_caregiver(
    change: ChangeType,
    visit: &Visit,
    caregiver: &Party,
    client: &Party,
    detail: Option<&str>,
) -> ComposedMessage {
    let date = format_visit_date(visit.visit_date);
    let times = format_time_range(visit);
    let client_name = client.full_name();

    let sms_body = match change {
        ChangeType::Cancellation => format!(
            "Hi {}, your visit with {} on {} has been cancelled. {}",
            caregiver.first_name,
            client_name,
            date,
            detail_or(detail, "No action is needed.")
        ),
        ChangeType::NewAssignment => format!(
            "Hi {}, you have been assigned a new visit with {} on {} from {}. {}",
            caregiver.first_name,
            client_name,
            date,
            times,
            detail_or(detail, "Please review the visit details in your portal.")
        ),
        ChangeType::TimeChange => format!(
            "Hi {}, your visit with {} on {} has been rescheduled to {}. {}",
            caregiver.first_name,
            client_name,
            date,
            times,
            detail_or(detail, "Please review your updated schedule.")
        ),
        // The resolver never requests a caregiver message for a caregiver
        // change; a generic update keeps the match total.
        ChangeType::CaregiverChange => format!(
            "Hi {}, there is an update to your visit with {} on {}. {}",
            caregiver.first_name,
            client_name,
            date,
            detail_or(detail, "Please review your updated schedule.")
        ),
    };

    let lead = match change {
        ChangeType::Cancellation => "A visit on your schedule has been cancelled.",
        ChangeType::NewAssignment => "You have been assigned a new visit.",
        ChangeType::TimeChange => "A visit on your schedule has been rescheduled.",
        ChangeType::CaregiverChange => "There is an update to a visit on your schedule.",
    };

    let address_item = client
        .full_address()
        .map(|addr| format!("<li><strong>Address:</strong> {}</li>", addr))
        .unwrap_or_default();

    let detail_block = detail
        .map(|d| format!("<p><strong>Note:</strong> {}</p>", d))
        .unwrap_or_default();

    let email_body = format!(
        "<p>Hi {first},</p>\
         <p>{lead}</p>\
         <ul>\
         <li><strong>Date:</strong> {date}</li>\
         <li><strong>Time:</strong> {times}</li>\
         <li><strong>Client:</strong> {client}</li>\
         {address_item}\
         </ul>\
         {detail_block}\
         <p>Thank you,<br/>{signature}</p>",
        first = caregiver.first_name,
        lead = lead,
        date = date,
        times = times,
        client = client_name,
        address_item = address_item,
        detail_block = detail_block,
        signature = SIGNATURE,
    );

    let email_subject = if change == ChangeType::NewAssignment {
        format!("Schedule Assignment - {}", date)
    } else {
        format!("Schedule Update - {}", date)
    };

    ComposedMessage {
        recipient: RecipientRole::Caregiver,
        sms_body,
        email_subject,
        email_body,
    }
}

// =============================================================================
// Visit confirmation
// =============================================================================

/// SMS asking the client to confirm an upcoming visit
pub fn confirmation_sms_body(visit: &Visit, client: &Party, caregiver: Option<&Party>) -> String {
    let caregiver_name = caregiver
        .map(Party::full_name)
        .unwrap_or_else(|| CAREGIVER_TBD.to_string());

    format!(
        "Hi {}, this is a reminder of your visit on {} from {} with caregiver {}. \
         Reply YES to confirm or call our office to reschedule.",
        client.first_name,
        format_visit_date(visit.visit_date),
        format_time_range(visit),
        caregiver_name
    )
}
