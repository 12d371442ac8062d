//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, ParsedIntent, Place};

/// Prompt parsing strategy. Selected once at process start: LLM-backed when a
/// credential is configured, keyword heuristic otherwise.
///
/// Parsing never fails to the caller. A strategy that cannot extract anything
/// returns `ParsedIntent::fallback(prompt)` so the general-query carrier is
/// always populated for a non-empty prompt.
#[async_trait::async_trait]
pub trait IntentParser: Send + Sync {
    async fn parse(&self, prompt: &str) -> ParsedIntent;
}

/// Free-form text generation for the general-question fallback.
#[async_trait::async_trait]
pub trait LlmPort: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError>;
}

/// Spot-finder collaborator: place recommendations for a destination + need.
#[async_trait::async_trait]
pub trait SpotFinderPort: Send + Sync {
    async fn recommend(&self, destination: &str, need: &str) -> Result<String, DomainError>;
}

/// Phrase-translator collaborator. `destination` may be the `"unknown"`
/// sentinel; target-language selection happens inside the collaborator.
#[async_trait::async_trait]
pub trait TranslatorPort: Send + Sync {
    async fn translate(&self, phrase: &str, destination: &str) -> Result<String, DomainError>;
}

/// Geocoding search. Returns up to `limit` places for a free-text query.
#[async_trait::async_trait]
pub trait GeocodePort: Send + Sync {
    async fn search(&self, query: &str, limit: u8) -> Result<Vec<Place>, DomainError>;
}

/// Machine translation of `text` into the ISO 639-1 `target_lang`.
#[async_trait::async_trait]
pub trait TranslationPort: Send + Sync {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, DomainError>;
}
