use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A scheduled home visit as stored by the care platform.
///
/// Dates and times are the platform's stored local wall-clock values; this
/// service renders them as-is and never converts between timezones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Visit {
    pub id: String,
    pub client_id: String,
    /// Unassigned visits have no caregiver yet
    pub caregiver_id: Option<String>,
    pub visit_date: NaiveDate,
    pub scheduled_start_time: NaiveTime,
    pub scheduled_end_time: NaiveTime,
}
