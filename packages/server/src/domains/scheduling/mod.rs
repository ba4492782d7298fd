//! Scheduling domain - read-only views of the care platform's visit records

pub mod models;

pub use models::{Party, Visit};
