//! Spot finder client. Implements SpotFinderPort against the spot-finder
//! service's JSON contract.

use crate::domain::DomainError;
use crate::ports::SpotFinderPort;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub struct SpotFinderClient {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl SpotFinderClient {
    pub fn new(url: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            timeout,
        }
    }
}

#[derive(Serialize)]
struct SpotFinderRequest<'a> {
    destination: &'a str,
    need: &'a str,
}

#[derive(Deserialize)]
struct SpotFinderResponse {
    recommendation: String,
}

#[async_trait::async_trait]
impl SpotFinderPort for SpotFinderClient {
    async fn recommend(&self, destination: &str, need: &str) -> Result<String, DomainError> {
        let response = self
            .client
            .post(&self.url)
            .timeout(self.timeout)
            .json(&SpotFinderRequest { destination, need })
            .send()
            .await
            .map_err(|e| DomainError::Downstream(format!("Spot finder request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(DomainError::Downstream(format!(
                "Spot finder error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let body: SpotFinderResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Downstream(format!("Invalid spot finder response: {}", e)))?;

        debug!(len = body.recommendation.len(), "recommendation received");
        Ok(body.recommendation)
    }
}
