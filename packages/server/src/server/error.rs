//! HTTP error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::domains::notifications::DispatchError;

/// Body shared by every non-2xx response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("SMS service is not configured")]
    SmsNotConfigured,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::MissingField(_) => ApiError::BadRequest(err.to_string()),
            DispatchError::VisitNotFound(_) | DispatchError::ClientNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            DispatchError::SmsNotConfigured => ApiError::SmsNotConfigured,
            DispatchError::InternalError(e) => ApiError::Internal(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::SmsNotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(e) => {
                // Full chain to the log; only the top-level message to the caller
                error!("Request failed: {:#}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorBody {
            success: false,
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}
