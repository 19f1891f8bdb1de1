//! Exercise backend API.
//!
//! This module wraps the HTTP endpoints of the exercise generation backend
//! and transforms their response bodies into explicitly-defined types.

mod client;
mod error;
mod models;

pub use error::BackendError;
pub use models::*;

use client::Client;
use log::*;

/// Path of the exercise generation endpoint.
///
const GENERATE_PATH: &str = "generate-exercises";

/// Responsible for asynchronous interaction with the exercise backend.
///
pub struct Backend {
    client: Client,
}

impl Backend {
    /// Returns a new instance for the given base URL.
    ///
    pub fn new(base_url: &str) -> Backend {
        debug!("Initializing backend client for {}...", base_url);
        Backend {
            client: Client::new(base_url),
        }
    }

    /// Returns the base URL requests are sent to.
    ///
    pub fn base_url(&self) -> &str {
        &self.client.base_url
    }

    /// Request exercises for the last `lessons` lessons. The value is sent
    /// exactly as given; the backend owns its validation.
    ///
    pub async fn generate_exercises(&self, lessons: &str) -> Result<GenerateResponse, BackendError> {
        debug!("Requesting exercises for lessons={:?}...", lessons);
        let response = self
            .client
            .get(GENERATE_PATH, Some(vec![("lessons", lessons)]))
            .await?;
        let status = response.status();

        // Body is parsed before the status is checked, error replies carry JSON too
        let body = response.bytes().await?;
        let data: GenerateResponse = match serde_json::from_slice(&body) {
            Ok(data) => data,
            Err(e) => {
                error!(
                    "Failed to deserialize backend response (status {}): {}. Response body: {}",
                    status,
                    e,
                    String::from_utf8_lossy(&body)
                );
                return Err(e.into());
            }
        };

        if !status.is_success() {
            warn!(
                "Backend reported failure with status {}: {:?}",
                status, data.error
            );
            return Err(BackendError::request(status, data.error));
        }

        debug!(
            "Backend generated {} exercises (doc: {}, api key present: {})",
            data.exercises.as_ref().map_or(0, |e| e.len()),
            data.doc_id_used.as_deref().unwrap_or("unknown"),
            data.api_key_present.as_deref().unwrap_or("unknown"),
        );
        Ok(data)
    }

    /// Returns the greeting served by the backend root route, confirming the
    /// backend is reachable.
    ///
    pub async fn health(&self) -> Result<String, BackendError> {
        debug!("Checking backend health...");
        let response = self.client.get("", None).await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(BackendError::request(status, None));
        }
        Ok(text)
    }
}
