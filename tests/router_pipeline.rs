// tests/router_pipeline.rs
//
// End-to-end routing through the real heuristic parser with stubbed
// collaborators: the pipeline a deployment without an LLM credential runs.

use pocket_pal::adapters::ai::HeuristicParser;
use pocket_pal::domain::{DomainError, ParsedIntent};
use pocket_pal::ports::{IntentParser, LlmPort, SpotFinderPort, TranslatorPort};
use pocket_pal::usecases::RouterService;
use std::sync::Arc;

struct FixedSpotFinder {
    fail: bool,
}

#[async_trait::async_trait]
impl SpotFinderPort for FixedSpotFinder {
    async fn recommend(&self, destination: &str, need: &str) -> Result<String, DomainError> {
        if self.fail {
            Err(DomainError::Downstream("connection refused".to_string()))
        } else {
            Ok(format!("Recommended {need} spots in {destination}"))
        }
    }
}

struct FixedTranslator;

#[async_trait::async_trait]
impl TranslatorPort for FixedTranslator {
    async fn translate(&self, phrase: &str, destination: &str) -> Result<String, DomainError> {
        Ok(format!("'{phrase}' for {destination}: hola"))
    }
}

fn service(spot_fail: bool) -> RouterService {
    RouterService::new(
        Arc::new(HeuristicParser::new()),
        Arc::new(FixedSpotFinder { fail: spot_fail }),
        Arc::new(FixedTranslator),
        None,
    )
}

#[tokio::test]
async fn find_prompt_routes_to_spot_finder() {
    let output = service(false)
        .route("find quick meals in Addis Ababa")
        .await
        .unwrap()
        .into_output();

    assert_eq!(output, "Recommended quick meals spots in addis ababa");
}

#[tokio::test]
async fn translate_prompt_routes_with_unknown_destination() {
    let output = service(false)
        .route("translate 'hello there'")
        .await
        .unwrap()
        .into_output();

    assert_eq!(output, "'hello there' for unknown: hola");
}

#[tokio::test]
async fn known_question_gets_canned_answer() {
    let output = service(false)
        .route("What’s the weather in Barcelona?")
        .await
        .unwrap()
        .into_output();

    assert!(output.contains("typically sunny in May"));
}

#[tokio::test]
async fn gibberish_gets_generic_answer_not_an_error() {
    let output = service(false).route("xyzzy plugh").await.unwrap().into_output();

    assert_eq!(
        output,
        "Sorry, I can’t answer that. Try a specific travel query."
    );
}

#[tokio::test]
async fn spot_failure_degrades_without_failing_request() {
    let output = service(true)
        .route("find cafes in Barcelona")
        .await
        .unwrap()
        .into_output();

    assert_eq!(output, "Unable to fetch recommendations at this time.");
}

#[tokio::test]
async fn same_prompt_yields_identical_output() {
    let svc = service(false);

    let first = svc
        .route("find cafes in Barcelona")
        .await
        .unwrap()
        .into_output();
    let second = svc
        .route("find cafes in Barcelona")
        .await
        .unwrap()
        .into_output();

    assert_eq!(first, second);
}

#[tokio::test]
async fn empty_prompt_is_rejected() {
    let err = service(false).route("   ").await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
}

#[tokio::test]
async fn heuristic_always_carries_the_general_query() {
    let intent = HeuristicParser::new().parse("anything at all").await;
    assert_ne!(intent, ParsedIntent::default());
    assert_eq!(intent.general_query.as_deref(), Some("anything at all"));
}
