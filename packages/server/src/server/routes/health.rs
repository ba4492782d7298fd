use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    channels: ChannelHealth,
}

#[derive(Serialize)]
pub struct ChannelHealth {
    sms: String,
    email: String,
}

/// Health check endpoint
///
/// Reports whether each delivery channel is configured. A missing SMS
/// transport is a degraded configuration, not an outage, so the endpoint
/// still answers 200.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let sms = if state.deps.sms.is_some() {
        "configured"
    } else {
        "not_configured"
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            channels: ChannelHealth {
                sms: sms.to_string(),
                email: "configured".to_string(),
            },
        }),
    )
}
