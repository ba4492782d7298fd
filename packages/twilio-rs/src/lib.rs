// https://www.twilio.com/docs/messaging/api/message-resource

use std::collections::HashMap;

pub mod models;
use reqwest::{header, Client, StatusCode};
use thiserror::Error;

use crate::models::MessageResponse;

#[derive(Debug, Error)]
pub enum TwilioError {
    #[error("request to Twilio failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("Twilio returned an error ({status}): {body}")]
    Api { status: StatusCode, body: String },
    #[error("failed to parse Twilio response: {0}")]
    Parse(#[source] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct TwilioOptions {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
}

#[derive(Debug, Clone)]
pub struct TwilioService {
    options: TwilioOptions,
}

impl TwilioService {
    pub fn new(options: TwilioOptions) -> Self {
        Self { options }
    }

    /// Queue an outbound SMS through the Programmable Messaging API and
    /// return the created message resource.
    pub async fn send_message(
        &self,
        to: &str,
        body: &str,
    ) -> Result<MessageResponse, TwilioError> {
        let account_sid = self.options.account_sid.clone();
        let auth_token = self.options.auth_token.clone();
        let from_number = self.options.from_number.clone();

        let url = format!(
            "https://api.twilio.com/2010-04-01/Accounts/{sid}/Messages.json",
            sid = account_sid
        );

        let mut headers = header::HeaderMap::new();
        headers.insert(
            "Content-Type",
            "application/x-www-form-urlencoded"
                .parse()
                .expect("Header value should parse correctly"),
        );

        let mut form_body: HashMap<&str, &str> = HashMap::new();
        form_body.insert("To", to);
        form_body.insert("From", &from_number);
        form_body.insert("Body", body);

        let client = Client::new();
        let res = client
            .post(url)
            .basic_auth(account_sid, Some(auth_token))
            .headers(headers)
            .form(&form_body)
            .send()
            .await;

        match res {
            Ok(response) => {
                let status = response.status();
                if !status.is_success() {
                    // Log the error response from Twilio
                    let error_body = response.text().await.unwrap_or_default();
                    tracing::error!("Twilio error ({}): {}", status, error_body);
                    return Err(TwilioError::Api {
                        status,
                        body: error_body,
                    });
                }

                response
                    .json::<MessageResponse>()
                    .await
                    .map_err(TwilioError::Parse)
            }
            Err(e) => {
                tracing::error!("Request to Twilio failed: {}", e);
                Err(TwilioError::Request(e))
            }
        }
    }
}
