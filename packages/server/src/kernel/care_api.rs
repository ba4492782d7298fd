use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::domains::scheduling::models::{Party, Visit};
use crate::kernel::BaseCareStore;

/// Read-only client for the hosted care platform's entity API
pub struct CareApiClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl CareApiClient {
    /// Create a new care platform client
    pub fn new(base_url: String, api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
        })
    }

    /// Fetch one record from an entity collection. A 404 means the record
    /// does not exist and maps to `Ok(None)`.
    async fn fetch_entity<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<T>> {
        let url = format!("{}/api/entities/{}/{}", self.base_url, collection, id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {} {}", collection, id))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Care platform API error {}: {}", status, body);
        }

        let record: T = response
            .json()
            .await
            .with_context(|| format!("Failed to parse {} record", collection))?;

        Ok(Some(record))
    }
}

#[async_trait]
impl BaseCareStore for CareApiClient {
    async fn get_visit(&self, id: &str) -> Result<Option<Visit>> {
        self.fetch_entity("visits", id).await
    }

    async fn get_client(&self, id: &str) -> Result<Option<Party>> {
        self.fetch_entity("clients", id).await
    }

    async fn get_caregiver(&self, id: &str) -> Result<Option<Party>> {
        self.fetch_entity("caregivers", id).await
    }
}
