//! Phrase translator client. Implements TranslatorPort against the
//! phrase-translator service's JSON contract.

use crate::domain::DomainError;
use crate::ports::TranslatorPort;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub struct TranslatorClient {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl TranslatorClient {
    pub fn new(url: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            timeout,
        }
    }
}

#[derive(Serialize)]
struct TranslatorRequest<'a> {
    phrase: &'a str,
    destination: &'a str,
}

#[derive(Deserialize)]
struct TranslatorResponse {
    translation: String,
}

#[async_trait::async_trait]
impl TranslatorPort for TranslatorClient {
    async fn translate(&self, phrase: &str, destination: &str) -> Result<String, DomainError> {
        let response = self
            .client
            .post(&self.url)
            .timeout(self.timeout)
            .json(&TranslatorRequest {
                phrase,
                destination,
            })
            .send()
            .await
            .map_err(|e| DomainError::Downstream(format!("Translator request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(DomainError::Downstream(format!(
                "Translator error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let body: TranslatorResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Downstream(format!("Invalid translator response: {}", e)))?;

        debug!(len = body.translation.len(), "translation received");
        Ok(body.translation)
    }
}
