//! Keyword heuristic parser. Fallback strategy when no LLM credential is
//! configured.
//!
//! Intentionally crude: exact token matching on the lower-cased prompt, not
//! real NLU. The lower-cased prompt always doubles as the general query.

use crate::domain::ParsedIntent;
use crate::ports::IntentParser;
use tracing::debug;

/// Keyword-matching parser. `find ... in ...` selects a place lookup,
/// `translate ...` selects a translation.
#[derive(Debug, Default)]
pub struct HeuristicParser;

impl HeuristicParser {
    pub fn new() -> Self {
        Self
    }

    fn extract(prompt: &str) -> ParsedIntent {
        let lowered = prompt.to_lowercase();
        let mut intent = ParsedIntent {
            general_query: Some(lowered.clone()),
            ..ParsedIntent::default()
        };

        if lowered.contains("find") && lowered.contains(" in ") {
            // Need is everything left of the first " in " with the finding
            // token removed; destination is the segment right after it.
            let parts: Vec<&str> = lowered.split(" in ").collect();
            if parts.len() > 1 {
                intent.need = Some(parts[0].replace("find", "").trim().to_string());
                intent.destination = Some(parts[1].trim().to_string());
            }
        }

        if let Some(idx) = lowered.find("translate") {
            let rest = &lowered[idx + "translate".len()..];
            let phrase = rest.trim().trim_matches(|c| c == '\'' || c == '"');
            intent.phrase = Some(phrase.to_string());
        }

        intent
    }
}

#[async_trait::async_trait]
impl IntentParser for HeuristicParser {
    async fn parse(&self, prompt: &str) -> ParsedIntent {
        let intent = Self::extract(prompt);
        debug!(?intent, "heuristic parse");
        intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_in_splits_need_and_destination() {
        let intent = HeuristicParser::extract("find quick meals in Addis Ababa");

        assert_eq!(intent.need.as_deref(), Some("quick meals"));
        assert_eq!(intent.destination.as_deref(), Some("addis ababa"));
        assert_eq!(
            intent.general_query.as_deref(),
            Some("find quick meals in addis ababa")
        );
        assert!(intent.phrase.is_none());
    }

    #[test]
    fn only_the_finding_token_is_removed_from_need() {
        // Surrounding words survive; only the literal token is dropped.
        let intent = HeuristicParser::extract("please find quick meals in Addis Ababa");

        assert_eq!(intent.need.as_deref(), Some("please  quick meals"));
        assert_eq!(intent.destination.as_deref(), Some("addis ababa"));
    }

    #[test]
    fn find_without_in_selects_nothing() {
        let intent = HeuristicParser::extract("find tapas");

        assert!(intent.need.is_none());
        assert!(intent.destination.is_none());
        assert_eq!(intent.general_query.as_deref(), Some("find tapas"));
    }

    #[test]
    fn repeated_in_keeps_middle_segment_as_destination() {
        // Split semantics: the destination is the segment between the first
        // and second " in ", not the whole remainder.
        let intent = HeuristicParser::extract("find tapas in barcelona in may");

        assert_eq!(intent.need.as_deref(), Some("tapas"));
        assert_eq!(intent.destination.as_deref(), Some("barcelona"));
    }

    #[test]
    fn translate_strips_quotes_and_whitespace() {
        let intent = HeuristicParser::extract("translate 'hello there'");
        assert_eq!(intent.phrase.as_deref(), Some("hello there"));

        let intent = HeuristicParser::extract("Translate \"Good morning\"");
        assert_eq!(intent.phrase.as_deref(), Some("good morning"));
    }

    #[test]
    fn translate_mid_sentence_takes_remainder() {
        let intent = HeuristicParser::extract("could you translate excuse me, where is the station");

        assert_eq!(
            intent.phrase.as_deref(),
            Some("excuse me, where is the station")
        );
    }

    #[test]
    fn bare_translate_yields_empty_phrase() {
        let intent = HeuristicParser::extract("translate");

        // Present but empty; the router's presence check filters it out.
        assert_eq!(intent.phrase.as_deref(), Some(""));
        assert!(intent.phrase_task().is_none());
    }

    #[test]
    fn unstructured_prompt_only_carries_general_query() {
        let intent = HeuristicParser::extract("xyzzy plugh");

        assert_eq!(
            intent,
            ParsedIntent {
                general_query: Some("xyzzy plugh".to_string()),
                ..ParsedIntent::default()
            }
        );
    }
}
