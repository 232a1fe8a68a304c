//! HTTP client for the training entry service.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::entries::{EntryId, NewEntry, TrainingEntry};

use super::types::{rejection, ApiError, CreatedResponse, EntriesResponse};

/// Path of the entry collection, relative to the base URL.
const ENTRIES_PATH: &str = "/api/entries";

/// Client for `GET`/`POST /api/entries`.
#[derive(Debug, Clone)]
pub struct EntriesClient {
    /// HTTP client
    http: reqwest::Client,
    /// Base URL without trailing slash
    base_url: String,
}

impl EntriesClient {
    /// Create a client for `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of the entry collection.
    pub fn entries_url(&self) -> String {
        format!("{}{}", self.base_url, ENTRIES_PATH)
    }

    /// Load every stored entry.
    pub async fn fetch_entries(&self) -> Result<Vec<TrainingEntry>, ApiError> {
        let url = self.entries_url();
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let body: EntriesResponse = decode(response).await?;
        Ok(body.into_entries())
    }

    /// Submit a new entry and return the id the backend assigned.
    pub async fn create_entry(&self, entry: &NewEntry) -> Result<EntryId, ApiError> {
        let url = self.entries_url();
        tracing::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(entry)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let body: CreatedResponse = decode(response).await?;
        Ok(body.id)
    }
}

async fn decode<R: DeserializeOwned>(response: reqwest::Response) -> Result<R, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !status.is_success() {
        return Err(rejection(status, &text));
    }

    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}
