pub mod event;
pub mod report;

pub use event::{ChangeType, NotificationEvent, ScheduleChangeRequest, VisitConfirmationRequest};
pub use report::{DeliveryMethod, DeliveryResult, DeliveryStatus, DispatchReport, RecipientRole};
