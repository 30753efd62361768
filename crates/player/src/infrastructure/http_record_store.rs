//! HTTP record store client
//!
//! Implements `RecordStorePort` against a JSON endpoint that wraps the stored record
//! in an envelope on read:
//!
//! ```json
//! { "statusCode": 200, "body": { "attributePoints": {...}, "skillPoints": {...} } }
//! ```
//!
//! and accepts the bare snapshot on write.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use charsheet_domain::CharacterSnapshot;

use crate::config::{SaveMethod, StoreConfig};
use crate::ports::outbound::{RecordStorePort, StoreError};

/// Message the store returns in a 2xx body when the record does not exist.
const ITEM_NOT_FOUND: &str = "Item not found";

/// Client for the remote character record
#[derive(Clone)]
pub struct HttpRecordStore {
    client: Client,
    record_url: String,
    save_method: SaveMethod,
}

impl HttpRecordStore {
    pub fn new(config: &StoreConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            record_url: config.record_url(),
            save_method: config.save_method,
        }
    }

    pub fn record_url(&self) -> &str {
        &self.record_url
    }
}

#[derive(Debug, Deserialize)]
struct FetchEnvelope {
    #[serde(default)]
    body: Option<CharacterSnapshot>,
    #[serde(default)]
    message: Option<String>,
}

/// Interpret a successful fetch response body.
fn parse_fetch_body(value: serde_json::Value) -> Result<Option<CharacterSnapshot>, StoreError> {
    let envelope: FetchEnvelope =
        serde_json::from_value(value).map_err(StoreError::invalid_response)?;

    if envelope.message.as_deref() == Some(ITEM_NOT_FOUND) {
        return Ok(None);
    }
    Ok(envelope.body)
}

#[async_trait]
impl RecordStorePort for HttpRecordStore {
    async fn fetch(&self) -> Result<Option<CharacterSnapshot>, StoreError> {
        tracing::debug!(url = %self.record_url, "Fetching character record");

        let response = self
            .client
            .get(&self.record_url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(StoreError::request)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StoreError::status(status.as_u16(), error_text));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(StoreError::invalid_response)?;

        parse_fetch_body(body)
    }

    async fn store(&self, snapshot: &CharacterSnapshot) -> Result<(), StoreError> {
        if tracing::enabled!(tracing::Level::DEBUG) {
            let pretty = serde_json::to_string_pretty(snapshot)
                .map_err(|e| StoreError::Serialization(e.to_string()))?;
            tracing::debug!(url = %self.record_url, body = %pretty, "Saving character record");
        }

        let request = match self.save_method {
            SaveMethod::Put => self.client.put(&self.record_url),
            SaveMethod::Post => self.client.post(&self.record_url),
        };

        let response = request
            .header(ACCEPT, "application/json")
            .json(snapshot)
            .send()
            .await
            .map_err(StoreError::request)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StoreError::status(status.as_u16(), error_text));
        }

        Ok(())
    }
}
