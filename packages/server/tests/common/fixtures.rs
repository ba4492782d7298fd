//! Shared seed data for router-level tests.
//!
//! One visit with its client and caregiver, inserted into the in-memory
//! store. Individual tests override pieces of this when they need a
//! missing phone number or an unassigned visit.

use chrono::{NaiveDate, NaiveTime};
use server_core::domains::scheduling::models::{Party, Visit};
use server_core::kernel::test_dependencies::InMemoryCareStore;

pub const VISIT_ID: &str = "visit-1001";
pub const CLIENT_ID: &str = "client-2001";
pub const CAREGIVER_ID: &str = "cg-3001";

pub const CLIENT_PHONE: &str = "+15555550111";
pub const CLIENT_EMAIL: &str = "maria@example.com";
pub const CAREGIVER_PHONE: &str = "+15555550122";
pub const CAREGIVER_EMAIL: &str = "james@example.com";

/// Tuesday Jan 16 2024, 9:00 AM - 11:00 AM
pub fn test_visit() -> Visit {
    Visit {
        id: VISIT_ID.to_string(),
        client_id: CLIENT_ID.to_string(),
        caregiver_id: Some(CAREGIVER_ID.to_string()),
        visit_date: NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
        scheduled_start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        scheduled_end_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
    }
}

pub fn test_client() -> Party {
    Party {
        id: CLIENT_ID.to_string(),
        first_name: "Maria".to_string(),
        last_name: "Alvarez".to_string(),
        phone: Some(CLIENT_PHONE.to_string()),
        email: Some(CLIENT_EMAIL.to_string()),
        address: Some("425 Lakewood Ave".to_string()),
        city: Some("Saint Paul".to_string()),
        state: Some("MN".to_string()),
        zip: Some("55104".to_string()),
    }
}

pub fn test_caregiver() -> Party {
    Party {
        id: CAREGIVER_ID.to_string(),
        first_name: "James".to_string(),
        last_name: "Okafor".to_string(),
        phone: Some(CAREGIVER_PHONE.to_string()),
        email: Some(CAREGIVER_EMAIL.to_string()),
        address: None,
        city: None,
        state: None,
        zip: None,
    }
}

/// Store holding the standard visit with both parties on file
pub fn seeded_store() -> InMemoryCareStore {
    InMemoryCareStore::new()
        .with_visit(test_visit())
        .with_client(test_client())
        .with_caregiver(test_caregiver())
}
