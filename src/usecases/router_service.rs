//! Prompt router. Parses one prompt into sub-tasks, dispatches each to its
//! collaborator, and merges results into a single response.
//!
//! Collaborator failures degrade to fixed apology sentences and never surface
//! as request errors; only malformed input or a total absence of actionable
//! tasks does.

use crate::domain::{DomainError, ParsedIntent, ResponseBundle, TaskResult, UNKNOWN_DESTINATION};
use crate::ports::{IntentParser, LlmPort, SpotFinderPort, TranslatorPort};
use std::sync::Arc;
use tracing::{info, warn};

/// User-facing degradation sentence for a failed spot-finder call.
pub const RECOMMENDATION_UNAVAILABLE: &str = "Unable to fetch recommendations at this time.";

/// User-facing degradation sentence for a failed translator call.
pub const TRANSLATION_UNAVAILABLE: &str = "Unable to fetch translation at this time.";

/// Generic answer when a general query matches nothing.
pub const CANT_ANSWER: &str = "Sorry, I can’t answer that. Try a specific travel query.";

/// Canned answers for known example queries, consulted when no LLM is
/// configured or the LLM call fails. Lookup is case-insensitive exact match.
const MOCK_ANSWERS: &[(&str, &str)] = &[
    (
        "What’s the weather in Barcelona?",
        "The weather in Barcelona is typically sunny in May, with temperatures around 20°C.",
    ),
    (
        "What are some local customs in Tokyo?",
        "In Tokyo, it’s customary to bow when greeting and remove shoes before entering homes.",
    ),
];

fn mock_answer(query: &str) -> Option<&'static str> {
    let normalized = query.to_lowercase();
    MOCK_ANSWERS
        .iter()
        .find(|(question, _)| question.to_lowercase() == normalized)
        .map(|(_, answer)| *answer)
}

/// The orchestrator core.
///
/// Holds the parsing strategy selected at startup and the two collaborator
/// clients. `llm` is present only when a credential was configured; without
/// it, general questions fall back to the canned answers.
pub struct RouterService {
    parser: Arc<dyn IntentParser>,
    spot_finder: Arc<dyn SpotFinderPort>,
    translator: Arc<dyn TranslatorPort>,
    llm: Option<Arc<dyn LlmPort>>,
}

impl RouterService {
    pub fn new(
        parser: Arc<dyn IntentParser>,
        spot_finder: Arc<dyn SpotFinderPort>,
        translator: Arc<dyn TranslatorPort>,
        llm: Option<Arc<dyn LlmPort>>,
    ) -> Self {
        Self {
            parser,
            spot_finder,
            translator,
            llm,
        }
    }

    /// Route one prompt: parse, dispatch every applicable sub-task, merge.
    ///
    /// Structured tasks (recommendation, translation) take precedence over the
    /// general-question fallback; the fallback runs only when neither produced
    /// a result. A failure in one sub-task never cancels the other.
    pub async fn route(&self, prompt: &str) -> Result<ResponseBundle, DomainError> {
        if prompt.trim().is_empty() {
            return Err(DomainError::InvalidInput("No prompt provided".to_string()));
        }

        let intent = self.parser.parse(prompt).await;
        info!(
            destination = intent.destination.as_deref().unwrap_or("-"),
            need = intent.need.as_deref().unwrap_or("-"),
            phrase = intent.phrase.as_deref().unwrap_or("-"),
            "prompt parsed"
        );

        let mut bundle = ResponseBundle::new();

        if let Some((destination, need)) = intent.spot_task() {
            match self.spot_finder.recommend(destination, need).await {
                Ok(text) => bundle.push(TaskResult::ok(text)),
                Err(e) => {
                    warn!(error = %e, destination, need, "spot finder call failed");
                    bundle.push(TaskResult::degraded(RECOMMENDATION_UNAVAILABLE));
                }
            }
        }

        if let Some(phrase) = intent.phrase_task() {
            let destination = intent
                .destination
                .as_deref()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or(UNKNOWN_DESTINATION);
            match self.translator.translate(phrase, destination).await {
                Ok(text) => bundle.push(TaskResult::ok(text)),
                Err(e) => {
                    warn!(error = %e, phrase, "translator call failed");
                    bundle.push(TaskResult::degraded(TRANSLATION_UNAVAILABLE));
                }
            }
        }

        if bundle.is_empty() {
            if let Some(query) = intent.general_task() {
                bundle.push(self.answer_general(query).await);
            }
        }

        if bundle.is_empty() {
            // Unreachable with the shipped parser strategies (a non-empty
            // prompt always carries general_query); kept as the contract for
            // parsers that violate that invariant.
            return Err(DomainError::NoActionableTask);
        }

        Ok(bundle)
    }

    /// Answer a general question: LLM when configured, canned answers
    /// otherwise. Never fails; the generic sentence is the floor.
    async fn answer_general(&self, query: &str) -> TaskResult {
        if let Some(llm) = &self.llm {
            match llm.generate(query).await {
                Ok(text) => return TaskResult::ok(text),
                Err(e) => {
                    warn!(error = %e, "LLM answer failed, falling back to canned answers");
                }
            }
        }
        match mock_answer(query) {
            Some(answer) => TaskResult::ok(answer),
            None => TaskResult::degraded(CANT_ANSWER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubParser(ParsedIntent);

    #[async_trait::async_trait]
    impl IntentParser for StubParser {
        async fn parse(&self, _prompt: &str) -> ParsedIntent {
            self.0.clone()
        }
    }

    /// Proves a code path never consults the parser.
    struct PanickingParser;

    #[async_trait::async_trait]
    impl IntentParser for PanickingParser {
        async fn parse(&self, _prompt: &str) -> ParsedIntent {
            panic!("parser must not be called");
        }
    }

    struct StubSpotFinder {
        fail: bool,
    }

    #[async_trait::async_trait]
    impl SpotFinderPort for StubSpotFinder {
        async fn recommend(&self, destination: &str, need: &str) -> Result<String, DomainError> {
            if self.fail {
                Err(DomainError::Downstream("connection refused".to_string()))
            } else {
                Ok(format!("Top spots for {need} in {destination}"))
            }
        }
    }

    struct StubTranslator {
        fail: bool,
    }

    #[async_trait::async_trait]
    impl TranslatorPort for StubTranslator {
        async fn translate(&self, phrase: &str, destination: &str) -> Result<String, DomainError> {
            if self.fail {
                Err(DomainError::Downstream("timeout".to_string()))
            } else {
                Ok(format!("translated[{phrase}|{destination}]"))
            }
        }
    }

    struct StubLlm {
        fail: bool,
    }

    #[async_trait::async_trait]
    impl LlmPort for StubLlm {
        async fn generate(&self, _prompt: &str) -> Result<String, DomainError> {
            if self.fail {
                Err(DomainError::Llm("quota exceeded".to_string()))
            } else {
                Ok("llm answer".to_string())
            }
        }
    }

    /// Should never be asked anything when a structured task was produced.
    struct PanickingLlm;

    #[async_trait::async_trait]
    impl LlmPort for PanickingLlm {
        async fn generate(&self, _prompt: &str) -> Result<String, DomainError> {
            panic!("general-query fallback must not run");
        }
    }

    fn router(
        intent: ParsedIntent,
        spot_fail: bool,
        translator_fail: bool,
        llm: Option<Arc<dyn LlmPort>>,
    ) -> RouterService {
        RouterService::new(
            Arc::new(StubParser(intent)),
            Arc::new(StubSpotFinder { fail: spot_fail }),
            Arc::new(StubTranslator {
                fail: translator_fail,
            }),
            llm,
        )
    }

    fn spot_intent() -> ParsedIntent {
        ParsedIntent {
            destination: Some("addis ababa".to_string()),
            need: Some("quick meals".to_string()),
            general_query: Some("please find quick meals in addis ababa".to_string()),
            ..ParsedIntent::default()
        }
    }

    #[tokio::test]
    async fn empty_prompt_rejected_before_parsing() {
        let service = RouterService::new(
            Arc::new(PanickingParser),
            Arc::new(StubSpotFinder { fail: false }),
            Arc::new(StubTranslator { fail: false }),
            None,
        );

        let err = service.route("   ").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn both_tasks_merged_with_blank_line() {
        let intent = ParsedIntent {
            phrase: Some("hello there".to_string()),
            ..spot_intent()
        };
        let bundle = router(intent, false, false, None)
            .route("anything")
            .await
            .unwrap();

        assert_eq!(bundle.results().len(), 2);
        assert_eq!(
            bundle.into_output(),
            "Top spots for quick meals in addis ababa\n\ntranslated[hello there|addis ababa]"
        );
    }

    #[tokio::test]
    async fn structured_task_takes_precedence_over_general_query() {
        let service = RouterService::new(
            Arc::new(StubParser(spot_intent())),
            Arc::new(StubSpotFinder { fail: false }),
            Arc::new(StubTranslator { fail: false }),
            Some(Arc::new(PanickingLlm)),
        );

        let output = service.route("anything").await.unwrap().into_output();
        assert_eq!(output, "Top spots for quick meals in addis ababa");
    }

    #[tokio::test]
    async fn spot_failure_does_not_cancel_translation() {
        let intent = ParsedIntent {
            phrase: Some("hello".to_string()),
            ..spot_intent()
        };
        let bundle = router(intent, true, false, None)
            .route("anything")
            .await
            .unwrap();

        let output = bundle.into_output();
        assert!(output.contains(RECOMMENDATION_UNAVAILABLE));
        assert!(output.contains("translated[hello|addis ababa]"));
        assert!(!output.contains("Top spots"));
    }

    #[tokio::test]
    async fn destination_alone_selects_no_lookup() {
        let intent = ParsedIntent {
            destination: Some("paris".to_string()),
            general_query: Some("xyzzy plugh".to_string()),
            ..ParsedIntent::default()
        };
        let output = router(intent, false, false, None)
            .route("anything")
            .await
            .unwrap()
            .into_output();

        assert_eq!(output, CANT_ANSWER);
    }

    #[tokio::test]
    async fn missing_destination_defaults_to_unknown_sentinel() {
        let intent = ParsedIntent {
            phrase: Some("good morning".to_string()),
            general_query: Some("translate good morning".to_string()),
            ..ParsedIntent::default()
        };
        let output = router(intent, false, false, None)
            .route("anything")
            .await
            .unwrap()
            .into_output();

        assert_eq!(output, "translated[good morning|unknown]");
    }

    #[tokio::test]
    async fn known_general_query_answered_from_canned_map() {
        let intent = ParsedIntent::fallback("what’s the weather in barcelona?");
        let output = router(intent, false, false, None)
            .route("anything")
            .await
            .unwrap()
            .into_output();

        assert!(output.contains("typically sunny in May"));
    }

    #[tokio::test]
    async fn llm_failure_falls_back_to_canned_map() {
        let intent = ParsedIntent::fallback("What’s the weather in Barcelona?");
        let output = router(intent, false, false, Some(Arc::new(StubLlm { fail: true })))
            .route("anything")
            .await
            .unwrap()
            .into_output();

        assert!(output.contains("typically sunny in May"));
    }

    #[tokio::test]
    async fn unknown_general_query_gets_generic_answer() {
        let intent = ParsedIntent::fallback("xyzzy plugh");
        let bundle = router(intent, false, false, None)
            .route("anything")
            .await
            .unwrap();

        assert_eq!(bundle.results().len(), 1);
        assert!(bundle.results()[0].degraded);
        assert_eq!(bundle.into_output(), CANT_ANSWER);
    }

    #[tokio::test]
    async fn general_query_answered_by_llm_when_configured() {
        let intent = ParsedIntent::fallback("xyzzy plugh");
        let output = router(intent, false, false, Some(Arc::new(StubLlm { fail: false })))
            .route("anything")
            .await
            .unwrap()
            .into_output();

        assert_eq!(output, "llm answer");
    }

    #[tokio::test]
    async fn routing_is_idempotent() {
        let intent = ParsedIntent {
            phrase: Some("hello".to_string()),
            ..spot_intent()
        };
        let service = router(intent, false, false, None);

        let first = service.route("anything").await.unwrap().into_output();
        let second = service.route("anything").await.unwrap().into_output();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn all_empty_intent_yields_no_actionable_task() {
        let err = router(ParsedIntent::default(), false, false, None)
            .route("anything")
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NoActionableTask));
    }

    #[test]
    fn canned_lookup_is_case_insensitive() {
        assert!(mock_answer("WHAT’S THE WEATHER IN BARCELONA?").is_some());
        assert!(mock_answer("what are some local customs in tokyo?").is_some());
        assert!(mock_answer("what is the meaning of life?").is_none());
    }
}
