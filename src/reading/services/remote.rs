//! HTTP reading backend.
//!
//! Sends the drawn pair to `{base_url}/reading` and expects the artwork
//! back in the same shape as the pass-through service produces:
//!
//! ```text
//! POST /reading   {"card1": Card, "card2": Card}
//! 200 OK          {"card1Image": "...", "card2Image": "..."}
//! ```

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Serialize;

use crate::core::catalog::Card;
use crate::reading::{ReadingError, ReadingResult, ReadingService};

#[derive(Serialize, Debug)]
struct ReadingRequest<'a> {
    card1: &'a Card,
    card2: &'a Card,
}

/// Reading service backed by a remote endpoint.
pub struct RemoteReadingService {
    api_key: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

impl RemoteReadingService {
    /// Creates a new remote service.
    ///
    /// # Arguments
    /// * `api_key` - Bearer credential; the call fails with `Config` when absent
    /// * `base_url` - Endpoint root, without the trailing `/reading`
    pub fn new(api_key: Option<String>, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn send_request(
        &self,
        request: &ReadingRequest<'_>,
    ) -> Result<reqwest::Response, ReadingError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ReadingError::Config("API_KEY is not set".to_string()))?;

        let response = self
            .client
            .post(format!("{}/reading", self.base_url))
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| ReadingError::Network(e.to_string()))?;

        debug!("Reading backend response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Reading backend error: {} - {}", status, err_body);
            return Err(ReadingError::Api {
                status,
                message: err_body,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl ReadingService for RemoteReadingService {
    fn name(&self) -> &str {
        "remote"
    }

    async fn fetch_reading(
        &self,
        first: &Card,
        second: &Card,
    ) -> Result<ReadingResult, ReadingError> {
        info!("Requesting reading for {} + {}", first.name, second.name);
        let request = ReadingRequest {
            card1: first,
            card2: second,
        };

        let response = self.send_request(&request).await?;
        let body = response
            .text()
            .await
            .map_err(|e| ReadingError::Network(e.to_string()))?;
        let result: ReadingResult =
            serde_json::from_str(&body).map_err(|e| ReadingError::Parse(e.to_string()))?;

        // Both images or nothing.
        if result.card1_image.trim().is_empty() || result.card2_image.trim().is_empty() {
            return Err(ReadingError::Parse("reading is missing an image".to_string()));
        }

        Ok(result)
    }
}
