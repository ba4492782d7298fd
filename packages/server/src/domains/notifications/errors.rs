use thiserror::Error;

/// Failures the dispatch workflow can surface to callers
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Visit not found: {0}")]
    VisitNotFound(String),

    #[error("Client not found for visit: {0}")]
    ClientNotFound(String),

    #[error("SMS service is not configured")]
    SmsNotConfigured,

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}
