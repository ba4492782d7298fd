use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::kernel::{BaseMailService, MailReceipt};

/// Resend Transactional Email Client
/// Sends HTML email through the Resend REST API
pub struct ResendClient {
    client: Client,
    api_key: String,
    from_address: String,
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

impl ResendClient {
    pub fn new(api_key: String, from_address: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            from_address,
        }
    }
}

#[async_trait]
impl BaseMailService for ResendClient {
    /// Send a single HTML email and return the provider's message id
    async fn send_email(&self, to: &str, subject: &str, html_body: &str) -> Result<MailReceipt> {
        let message = SendEmailRequest {
            from: &self.from_address,
            to: vec![to],
            subject,
            html: html_body,
        };

        info!("Sending email to: {}", to);

        let response = self
            .client
            .post("https://api.resend.com/emails")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&message)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            error!("Email send failed {}: {}", status, body);
            anyhow::bail!("Mail API error {}: {}", status, body);
        }

        let sent: SendEmailResponse = response.json().await?;

        info!("Email sent successfully");
        Ok(MailReceipt {
            message_id: sent.id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resend_client_creation() {
        let client = ResendClient::new(
            "re_test_key".to_string(),
            "notifications@example.com".to_string(),
        );
        assert_eq!(client.from_address, "notifications@example.com");
    }

    #[tokio::test]
    #[ignore] // Requires a live Resend API key
    async fn test_send_email() {
        let api_key = std::env::var("TEST_RESEND_API_KEY").expect("TEST_RESEND_API_KEY not set");
        let to = std::env::var("TEST_MAIL_TO").expect("TEST_MAIL_TO not set");
        let client = ResendClient::new(api_key, "onboarding@resend.dev".to_string());

        let result = client
            .send_email(&to, "Test Email", "<p>This is a test message</p>")
            .await;

        assert!(result.is_ok());
    }
}
