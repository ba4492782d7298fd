//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use twilio::{TwilioOptions, TwilioService};

use crate::common::utils::ResendClient;
use crate::config::Config;
use crate::kernel::{BaseSmsService, CareApiClient, ServerDeps, TwilioAdapter};
use crate::server::routes::{health_handler, schedule_change_handler, visit_confirmation_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
}

/// Build the concrete service clients from configuration
pub fn build_deps(config: &Config) -> Result<ServerDeps> {
    let store = CareApiClient::new(
        config.care_api_base_url.clone(),
        config.care_api_key.clone(),
    )
    .context("Failed to create care platform client")?;

    let mailer = ResendClient::new(
        config.mail_api_key.clone(),
        config.mail_from_address.clone(),
    );

    let sms = match &config.twilio {
        Some(twilio) => {
            let service = Arc::new(TwilioService::new(TwilioOptions {
                account_sid: twilio.account_sid.clone(),
                auth_token: twilio.auth_token.clone(),
                from_number: twilio.from_number.clone(),
            }));
            Some(Arc::new(TwilioAdapter::new(service)) as Arc<dyn BaseSmsService>)
        }
        None => {
            tracing::info!("Twilio not configured; SMS channel disabled");
            None
        }
    };

    Ok(ServerDeps::new(Arc::new(store), sms, Arc::new(mailer)))
}

/// Build the Axum application router
pub fn build_app(deps: Arc<ServerDeps>) -> Router {
    let app_state = AppState { deps };

    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    Router::new()
        .route(
            "/notifications/schedule-change",
            post(schedule_change_handler),
        )
        .route(
            "/notifications/visit-confirmation",
            post(visit_confirmation_handler),
        )
        .route("/health", get(health_handler))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
