//! Spot finder HTTP surface. POST /spot_finder takes a destination + need
//! and returns a recommendation text.

use crate::domain::DomainError;
use crate::usecases::SpotService;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

#[derive(Deserialize)]
struct SpotFinderRequest {
    #[serde(default)]
    destination: Option<String>,
    #[serde(default)]
    need: Option<String>,
}

#[derive(Serialize)]
struct SpotFinderResponse {
    recommendation: String,
}

pub fn routes(service: Arc<SpotService>) -> Router {
    Router::new()
        .route("/spot_finder", post(spot_finder))
        .route("/health", get(super::health))
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(super::internal_fault))
        .with_state(service)
}

async fn spot_finder(
    State(service): State<Arc<SpotService>>,
    Json(request): Json<SpotFinderRequest>,
) -> Result<Json<SpotFinderResponse>, DomainError> {
    let destination = request.destination.unwrap_or_default();
    let need = request.need.unwrap_or_default();

    let recommendation = service.recommend(&destination, &need).await?;
    Ok(Json(SpotFinderResponse { recommendation }))
}
