//! Phrase translation use case. Resolves the target language from the
//! traveler's destination and formats the translated phrase.

use crate::domain::{DomainError, TargetLanguage};
use crate::ports::TranslationPort;
use std::sync::Arc;
use tracing::info;

const ENGLISH: TargetLanguage = TargetLanguage {
    code: "en",
    name: "english",
};

pub struct TranslationService {
    translator: Arc<dyn TranslationPort>,
}

impl TranslationService {
    pub fn new(translator: Arc<dyn TranslationPort>) -> Self {
        Self { translator }
    }

    /// Translate `phrase` into the primary language of `destination`.
    pub async fn translate_phrase(
        &self,
        phrase: &str,
        destination: &str,
    ) -> Result<String, DomainError> {
        if phrase.trim().is_empty() {
            return Err(DomainError::InvalidInput("Phrase is required".to_string()));
        }

        let target = target_language(destination);
        info!(destination, code = target.code, "translating phrase");

        let translated = self.translator.translate(phrase, target.code).await?;
        Ok(format!(
            "'{}' in {} ({}): {}",
            phrase, target.name, target.code, translated
        ))
    }
}

/// Map a destination to its primary language. The `"unknown"` sentinel and
/// any unmapped destination default to English.
fn target_language(destination: &str) -> TargetLanguage {
    match destination.to_lowercase().trim() {
        "barcelona" | "spain" => TargetLanguage {
            code: "es",
            name: "spanish",
        },
        "tokyo" | "japan" => TargetLanguage {
            code: "ja",
            name: "japanese",
        },
        "paris" | "france" => TargetLanguage {
            code: "fr",
            name: "french",
        },
        _ => ENGLISH,
    }
}
