//! Notifications domain - schedule change dispatch and visit confirmations

pub mod actions;
pub mod composer;
pub mod dispatcher;
pub mod errors;
pub mod models;
pub mod recipients;

pub use actions::{notify_schedule_change, send_visit_confirmation, ConfirmationReceipt};
pub use errors::DispatchError;
