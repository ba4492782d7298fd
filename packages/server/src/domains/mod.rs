// Business domains
pub mod notifications;
pub mod scheduling;
