//! Notification dispatch routes

use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::domains::notifications::models::{
    DeliveryResult, ScheduleChangeRequest, VisitConfirmationRequest,
};
use crate::domains::notifications::{notify_schedule_change, send_visit_confirmation};
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Debug, Serialize)]
pub struct ScheduleChangeResponse {
    pub success: bool,
    pub message: String,
    pub notifications_sent: Vec<DeliveryResult>,
}

#[derive(Debug, Serialize)]
pub struct ConfirmationResponse {
    pub success: bool,
    pub message: String,
    pub message_sid: String,
}

/// POST /notifications/schedule-change
pub async fn schedule_change_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<ScheduleChangeRequest>,
) -> Result<Json<ScheduleChangeResponse>, ApiError> {
    let report = notify_schedule_change(&request, &state.deps).await?;

    let message = if report.notifications_sent.is_empty() {
        "No notifications were required for this change".to_string()
    } else {
        "Schedule change notifications dispatched".to_string()
    };

    Ok(Json(ScheduleChangeResponse {
        success: report.success,
        message,
        notifications_sent: report.notifications_sent,
    }))
}

/// POST /notifications/visit-confirmation
pub async fn visit_confirmation_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<VisitConfirmationRequest>,
) -> Result<Json<ConfirmationResponse>, ApiError> {
    let receipt = send_visit_confirmation(&request, &state.deps).await?;

    Ok(Json(ConfirmationResponse {
        success: true,
        message: "Visit confirmation sent".to_string(),
        message_sid: receipt.message_sid,
    }))
}
