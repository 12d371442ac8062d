//! Gemini adapter. LLM strategy for prompt parsing and general-question
//! answering via the Google Generative Language API.
//!
//! Implements `IntentParser` and `LlmPort` with strict JSON parsing and
//! markdown stripping. Any call or parse failure degrades to a
//! general-query-only intent; the API is never retried.

use crate::domain::{DomainError, ParsedIntent};
use crate::ports::{IntentParser, LlmPort};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

pub struct GeminiAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl GeminiAdapter {
    /// Create a new Gemini adapter.
    ///
    /// # Arguments
    /// * `api_url` - API base (e.g. "https://generativelanguage.googleapis.com/v1beta")
    /// * `api_key` - Gemini API key
    /// * `model` - Model name (e.g. "gemini-1.5-flash")
    /// * `timeout` - Per-request timeout
    pub fn new(api_url: String, api_key: String, model: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            model,
            timeout,
        }
    }

    /// Instruction asking the model to emit exactly the four intent fields.
    fn parse_instruction(prompt: &str) -> String {
        format!(
            "Parse the following user prompt into four components: \
             destination (city and country), need (e.g., finding quick meals), \
             phrase to translate, and general query (if no specific task). \
             Return as JSON with fields: destination, need, phrase, general_query. \
             If a component is not present, return null for that field. \
             Prompt: '{prompt}'"
        )
    }

    /// Strip markdown code fences the model sometimes wraps around JSON.
    fn sanitize_json(raw_text: &str) -> String {
        let trimmed = raw_text.trim();

        if trimmed.starts_with("```") {
            let without_prefix = if trimmed.starts_with("```json") {
                trimmed.strip_prefix("```json").unwrap_or(trimmed)
            } else {
                trimmed.strip_prefix("```").unwrap_or(trimmed)
            };

            if let Some(end_idx) = without_prefix.rfind("```") {
                return without_prefix[..end_idx].trim().to_string();
            }
            return without_prefix.trim().to_string();
        }

        // JSON embedded in surrounding prose
        if let Some(start) = trimmed.find('{') {
            if let Some(end) = trimmed.rfind('}') {
                if start < end {
                    return trimmed[start..=end].to_string();
                }
            }
        }

        trimmed.to_string()
    }

    /// Strict decode of the model's intent JSON. Non-conforming shapes are
    /// rejected; the caller degrades to a fallback intent.
    fn parse_intent_json(raw: &str) -> Result<ParsedIntent, DomainError> {
        let clean = Self::sanitize_json(raw);
        let parsed: LlmIntent = serde_json::from_str(&clean).map_err(|e| {
            DomainError::Llm(format!(
                "Failed to parse intent JSON: {} (json: {})",
                e,
                clean.chars().take(200).collect::<String>()
            ))
        })?;

        Ok(ParsedIntent {
            destination: parsed.destination,
            need: parsed.need,
            phrase: parsed.phrase,
            general_query: parsed.general_query,
        })
    }

    async fn generate_content(&self, text: &str) -> Result<String, DomainError> {
        let url = format!("{}/models/{}:generateContent", self.api_url, self.model);

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: text.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.as_str())
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Llm(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "Gemini API returned error");
            return Err(DomainError::Llm(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Llm(format!("Failed to parse API response: {}", e)))?;

        body.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| DomainError::Llm("No candidates returned".to_string()))
    }
}

/// Gemini generateContent request structure.
#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

/// Gemini generateContent response structure.
#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

/// Intent schema the model is instructed to emit. Unknown fields reject the
/// whole shape rather than being silently dropped.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LlmIntent {
    destination: Option<String>,
    need: Option<String>,
    phrase: Option<String>,
    general_query: Option<String>,
}

#[async_trait::async_trait]
impl IntentParser for GeminiAdapter {
    async fn parse(&self, prompt: &str) -> ParsedIntent {
        let raw = match self.generate_content(&Self::parse_instruction(prompt)).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Gemini call failed, degrading to general query");
                return ParsedIntent::fallback(prompt);
            }
        };

        match Self::parse_intent_json(&raw) {
            Ok(intent) => {
                debug!(?intent, "gemini parse");
                intent
            }
            Err(e) => {
                warn!(error = %e, "intent JSON rejected, degrading to general query");
                ParsedIntent::fallback(prompt)
            }
        }
    }
}

#[async_trait::async_trait]
impl LlmPort for GeminiAdapter {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        self.generate_content(prompt).await
    }
}
