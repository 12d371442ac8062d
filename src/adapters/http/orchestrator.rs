//! Orchestrator HTTP surface. POST /orchestrator takes a free-text prompt
//! and returns the merged router output.

use crate::domain::DomainError;
use crate::usecases::RouterService;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

#[derive(Serialize)]
struct OrchestratorResponse {
    output: String,
}

pub fn routes(service: Arc<RouterService>) -> Router {
    Router::new()
        .route("/orchestrator", post(orchestrate))
        .route("/health", get(super::health))
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(super::internal_fault))
        .with_state(service)
}

/// The prompt is extracted by hand so a missing or non-string field is a
/// plain client error, not a deserialization rejection.
async fn orchestrate(
    State(service): State<Arc<RouterService>>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<OrchestratorResponse>, DomainError> {
    let prompt = body
        .get("prompt")
        .and_then(|v| v.as_str())
        .ok_or_else(|| DomainError::InvalidInput("No prompt provided".to_string()))?;

    let bundle = service.route(prompt).await?;
    Ok(Json(OrchestratorResponse {
        output: bundle.into_output(),
    }))
}
