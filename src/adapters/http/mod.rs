//! Inbound HTTP adapters. axum routers for the three services.
//!
//! Map DomainError to status codes. Raw failure detail stays in the operator
//! log; the client sees fixed user-facing messages.

pub mod orchestrator;
pub mod phrase_translator;
pub mod spot_finder;

use crate::domain::DomainError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, warn};

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            DomainError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            DomainError::NoActionableTask => (StatusCode::BAD_REQUEST, self.to_string()),
            DomainError::Downstream(_)
            | DomainError::Llm(_)
            | DomainError::Geocode(_)
            | DomainError::Translation(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
        };

        if status.is_server_error() {
            warn!(error = %self, "request failed");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Liveness probe shared by all three services.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}

/// Catch-all for panics escaping a handler: 500 with a generic body, full
/// detail in the log only.
pub fn internal_fault(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    error!(detail, "unexpected internal fault");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal server error" })),
    )
        .into_response()
}
