//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these; the HTTP layer maps them
//! to status codes.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Malformed request input. The message is user-facing.
    #[error("{0}")]
    InvalidInput(String),

    /// A well-formed prompt produced zero dispatchable sub-tasks. An expected
    /// outcome, not a system fault.
    #[error("No actionable task found in prompt")]
    NoActionableTask,

    /// A downstream collaborator call failed (timeout, connection error,
    /// non-2xx). Recovered into a degraded text result by the router.
    #[error("Downstream service error: {0}")]
    Downstream(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Geocoding error: {0}")]
    Geocode(String),

    #[error("Translation error: {0}")]
    Translation(String),
}
