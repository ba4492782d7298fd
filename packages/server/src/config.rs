use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use tracing::warn;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub care_api_base_url: String,
    pub care_api_key: String,
    pub mail_api_key: String,
    pub mail_from_address: String,
    pub twilio: Option<TwilioConfig>,
}

/// Twilio credentials. Present only when all three variables are set; the
/// SMS channel stays disabled otherwise.
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            care_api_base_url: env::var("CARE_API_BASE_URL")
                .context("CARE_API_BASE_URL must be set")?,
            care_api_key: env::var("CARE_API_KEY")
                .context("CARE_API_KEY must be set")?,
            mail_api_key: env::var("MAIL_API_KEY")
                .context("MAIL_API_KEY must be set")?,
            mail_from_address: env::var("MAIL_FROM_ADDRESS")
                .context("MAIL_FROM_ADDRESS must be set")?,
            twilio: twilio_from_env(),
        })
    }
}

fn twilio_from_env() -> Option<TwilioConfig> {
    let account_sid = env::var("TWILIO_ACCOUNT_SID").ok();
    let auth_token = env::var("TWILIO_AUTH_TOKEN").ok();
    let from_number = env::var("TWILIO_FROM_NUMBER").ok();

    match (account_sid, auth_token, from_number) {
        (Some(account_sid), Some(auth_token), Some(from_number)) => Some(TwilioConfig {
            account_sid,
            auth_token,
            from_number,
        }),
        (None, None, None) => None,
        _ => {
            warn!("Twilio credentials are partially configured; SMS channel disabled");
            None
        }
    }
}
