// Visit Notification Service - Server Core
//
// This crate dispatches schedule change notifications and visit confirmation
// messages for a home-health agency. Visit, client, and caregiver records are
// owned by the hosted care platform; this service reads them, composes
// per-recipient messages, and delivers them over SMS and email.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
