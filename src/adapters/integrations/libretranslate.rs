//! LibreTranslate adapter. Implements TranslationPort via a
//! LibreTranslate-compatible HTTP API.
//!
//! Source language is auto-detected by the API; only the target is supplied.

use crate::domain::DomainError;
use crate::ports::TranslationPort;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub struct LibreTranslateAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl LibreTranslateAdapter {
    /// Create a new translation adapter.
    ///
    /// # Arguments
    /// * `base_url` - Translate endpoint (e.g. "https://libretranslate.de/translate")
    /// * `api_key` - Optional API key; public instances run without one
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: String, api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
            timeout,
        }
    }
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

#[async_trait::async_trait]
impl TranslationPort for LibreTranslateAdapter {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, DomainError> {
        let response = self
            .client
            .post(&self.base_url)
            .timeout(self.timeout)
            .json(&TranslateRequest {
                q: text,
                source: "auto",
                target: target_lang,
                api_key: self.api_key.as_deref(),
            })
            .send()
            .await
            .map_err(|e| DomainError::Translation(format!("Translation request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::Translation(format!(
                "Translation API error {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Translation(format!("Invalid translation response: {}", e)))?;

        debug!(target_lang, len = body.translated_text.len(), "translation complete");
        Ok(body.translated_text)
    }
}
