//! Wire types and errors for the entry service.

use serde::Deserialize;
use thiserror::Error;

use crate::entries::{EntryId, TrainingEntry};

/// Body of `GET /api/entries`.
///
/// Records are kept as raw JSON so one malformed record does not fail the
/// whole load.
#[derive(Debug, Clone, Deserialize)]
pub struct EntriesResponse {
    /// Every stored record
    #[serde(default)]
    pub entries: Vec<serde_json::Value>,
}

impl EntriesResponse {
    /// Decode each record, skipping the ones that do not form an entry.
    pub fn into_entries(self) -> Vec<TrainingEntry> {
        self.entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| {
                serde_json::from_value::<TrainingEntry>(record)
                    .map_err(|e| tracing::warn!("Skipping malformed entry #{}: {}", index, e))
                    .ok()
            })
            .collect()
    }
}

/// Body of a successful `POST /api/entries`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedResponse {
    /// Id assigned by the backend
    pub id: EntryId,
}

/// Body of a failed request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    /// Reason given by the backend
    #[serde(default)]
    pub message: String,
}

/// Errors talking to the entry service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(String),

    /// Request never got a response
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status
    #[error("Server rejected the request ({status}): {message}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Message from the error body, or the status text
        message: String,
    },

    /// Response body did not have the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Build the rejection error for a non-success response.
///
/// Uses the `message` field of a JSON body when present, otherwise the
/// canonical reason of `status`.
pub fn rejection(status: reqwest::StatusCode, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });

    ApiError::Rejected {
        status: status.as_u16(),
        message,
    }
}
