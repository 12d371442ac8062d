//! Phrase translator HTTP surface. POST /phrase_translator takes a phrase
//! and an optional destination and returns the formatted translation.

use crate::domain::{DomainError, UNKNOWN_DESTINATION};
use crate::usecases::TranslationService;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

#[derive(Deserialize)]
struct PhraseTranslatorRequest {
    #[serde(default)]
    phrase: Option<String>,
    #[serde(default = "default_destination")]
    destination: String,
}

fn default_destination() -> String {
    UNKNOWN_DESTINATION.to_string()
}

#[derive(Serialize)]
struct PhraseTranslatorResponse {
    translation: String,
}

pub fn routes(service: Arc<TranslationService>) -> Router {
    Router::new()
        .route("/phrase_translator", post(phrase_translator))
        .route("/health", get(super::health))
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(super::internal_fault))
        .with_state(service)
}

async fn phrase_translator(
    State(service): State<Arc<TranslationService>>,
    Json(request): Json<PhraseTranslatorRequest>,
) -> Result<Json<PhraseTranslatorResponse>, DomainError> {
    let phrase = request.phrase.unwrap_or_default();

    let translation = service
        .translate_phrase(&phrase, &request.destination)
        .await?;
    Ok(Json(PhraseTranslatorResponse { translation }))
}
