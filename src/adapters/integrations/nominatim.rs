//! Nominatim adapter. Implements GeocodePort via the OpenStreetMap search
//! API.
//!
//! Nominatim requires an identifying User-Agent on every request.

use crate::domain::{DomainError, Place};
use crate::ports::GeocodePort;
use std::time::Duration;
use tracing::debug;

pub struct NominatimAdapter {
    client: reqwest::Client,
    base_url: String,
    user_agent: String,
    timeout: Duration,
}

impl NominatimAdapter {
    /// Create a new Nominatim adapter.
    ///
    /// # Arguments
    /// * `base_url` - Search endpoint (e.g. "https://nominatim.openstreetmap.org/search")
    /// * `user_agent` - Identifying User-Agent string sent with every request
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: String, user_agent: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            user_agent,
            timeout,
        }
    }
}

#[async_trait::async_trait]
impl GeocodePort for NominatimAdapter {
    async fn search(&self, query: &str, limit: u8) -> Result<Vec<Place>, DomainError> {
        let limit = limit.to_string();

        let response = self
            .client
            .get(&self.base_url)
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .timeout(self.timeout)
            .query(&[("q", query), ("format", "json"), ("limit", limit.as_str())])
            .send()
            .await
            .map_err(|e| DomainError::Geocode(format!("Nominatim request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(DomainError::Geocode(format!(
                "Nominatim error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let places: Vec<Place> = response
            .json()
            .await
            .map_err(|e| DomainError::Geocode(format!("Invalid Nominatim response: {}", e)))?;

        debug!(query, hits = places.len(), "nominatim search complete");
        Ok(places)
    }
}
